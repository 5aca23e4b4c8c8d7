use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "I love Rust")]
    pub title: String,
    #[schema(example = "lorem ipsum lorem ipsum")]
    pub content: String,
    #[schema(example = json!(["rust", "tech"]))]
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            tags: article.tags.into(),
            published_at: article.published_at,
            updated_at: article.updated_at,
        }
    }
}

/// One page of articles plus its position in the full result set.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub articles: Vec<ArticleDto>,
    pub pagination: PaginationDto,
}
