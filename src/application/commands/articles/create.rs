// src/application/commands/articles/create.rs
use super::{
    ArticleCommandService,
    validation::{check_payload, normalize_tags, trim_in_place},
};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleTitle, NewArticle, Tags},
};
use validator::Validate;

#[derive(Debug, Clone, Default, Validate)]
pub struct CreateArticleCommand {
    #[validate(length(min = 5, max = 255, message = "the length must be between 5 and 255"))]
    pub title: String,
    #[validate(length(min = 5, message = "the length must be no less than 5"))]
    pub content: String,
    pub tags: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }

    /// Trims title and content and normalises every tag in place.
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.title);
        trim_in_place(&mut self.content);
        normalize_tags(&mut self.tags);
    }

    /// Normalises, then validates. Callers must not validate raw input.
    pub fn clean(&mut self) -> ApplicationResult<()> {
        self.normalize();
        check_payload(&*self, &self.tags)
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            tags: self.tags,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        mut command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        command.clean()?;

        let CreateArticleCommand {
            title,
            content,
            tags,
        } = command;

        let new_article = NewArticle {
            title: ArticleTitle::new(title)?,
            content: ArticleContent::new(content)?,
            tags: Tags::new(tags)?,
        };

        let created = self.repo.create(new_article).await?;
        tracing::debug!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
