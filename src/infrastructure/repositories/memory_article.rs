use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct Store {
    next_id: i64,
    articles: BTreeMap<i64, Article>,
}

/// Process-local article store. Ids start at 1 and are never reused, so
/// iterating the map yields insertion order.
#[derive(Debug)]
pub struct InMemoryArticleRepository {
    inner: Mutex<Store>,
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Store {
                next_id: 1,
                articles: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Store>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Persistence("article store lock poisoned".into()))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.lock()?;
        let id = ArticleId::new(store.next_id)?;
        store.next_id += 1;

        let article = article.into_article(id);
        store.articles.insert(i64::from(id), article.clone());
        Ok(article)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let mut store = self.lock()?;
        let existing = store
            .articles
            .get_mut(&i64::from(article.id))
            .ok_or_else(|| DomainError::article_not_found(article.id))?;

        existing.title = article.title.clone();
        existing.content = article.content.clone();
        existing.updated_at = article.updated_at;
        Ok(existing.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut store = self.lock()?;
        store
            .articles
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::article_not_found(id))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let store = self.lock()?;
        Ok(store.articles.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let store = self.lock()?;
        Ok(store.articles.values().cloned().collect())
    }
}
