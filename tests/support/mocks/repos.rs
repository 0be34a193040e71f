// tests/support/mocks/repos.rs
use async_trait::async_trait;
use blog_api::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use blog_api::domain::errors::{DomainError, DomainResult};

/// Repository whose every call fails as if the database were unreachable.
pub struct FailingArticleRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database unavailable".into()))
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        unavailable()
    }

    async fn update(&self, _article: &Article) -> DomainResult<Article> {
        unavailable()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        unavailable()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        unavailable()
    }
}
