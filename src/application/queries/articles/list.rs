use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

/// Lists every article; there is no paging or filtering.
#[derive(Debug, Default)]
pub struct ListArticlesQuery;

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        _query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
