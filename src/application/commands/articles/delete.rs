// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        self.repo.delete(id).await?;
        tracing::debug!(article_id = %id, "article deleted");
        Ok(())
    }
}
