use super::{
    ArticleCommandService,
    validation::{check_payload, normalize_tags, trim_optional},
};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleTitle, Tags},
};
use validator::Validate;

/// Partial update. A blank `title`/`content` or an empty `tags` list leaves
/// the stored value untouched; there is no way to clear a field.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateArticleCommand {
    pub id: i64,
    #[validate(length(min = 5, max = 255, message = "the length must be between 5 and 255"))]
    pub title: Option<String>,
    #[validate(length(min = 5, message = "the length must be no less than 5"))]
    pub content: Option<String>,
    pub tags: Vec<String>,
}

impl UpdateArticleCommand {
    pub fn normalize(&mut self) {
        trim_optional(&mut self.title);
        trim_optional(&mut self.content);
        normalize_tags(&mut self.tags);
    }

    pub fn clean(&mut self) -> ApplicationResult<()> {
        self.normalize();
        check_payload(&*self, &self.tags)
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        mut command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        command.clean()?;

        let UpdateArticleCommand {
            id: _,
            title,
            content,
            tags,
        } = command;

        let title = title.map(ArticleTitle::new).transpose()?;
        let content = content.map(ArticleContent::new).transpose()?;
        let tags = if tags.is_empty() {
            None
        } else {
            Some(Tags::new(tags)?)
        };

        let mut article = self.repo.get_by_id(id).await?;
        article.apply_changes(title, content, tags);

        let updated = self.repo.update(article).await?;
        tracing::debug!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
