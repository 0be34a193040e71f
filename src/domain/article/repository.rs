use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Persist the title, content and `updated_at` of an existing article.
    /// Fails with `NotFound` when the row no longer exists.
    async fn update(&self, article: &Article) -> DomainResult<Article>;
    /// Fails with `NotFound` when no row was removed.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// All articles in insertion order.
    async fn list(&self) -> DomainResult<Vec<Article>>;
}
