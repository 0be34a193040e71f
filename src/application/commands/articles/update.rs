use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleContent, ArticleId, ArticleTitle},
        errors::DomainError,
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand { id, title, content } = command;
        let id = ArticleId::new(id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::article_not_found(id))?;

        let title = ArticleTitle::new(title)?;
        let content = ArticleContent::new(content);
        article.update(title, content, self.clock.now());

        // Single-statement write; a row deleted since the lookup surfaces as NotFound.
        let updated = self.write_repo.update(&article).await?;

        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
