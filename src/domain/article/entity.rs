// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle, Tags};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub tags: Tags,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Overwrites only the fields that were supplied. An empty tag list counts
    /// as "not supplied".
    pub fn apply_changes(
        &mut self,
        title: Option<ArticleTitle>,
        content: Option<ArticleContent>,
        tags: Option<Tags>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(tags) = tags.filter(|t| !t.is_empty()) {
            self.tags = tags;
        }
    }

    /// Timestamp for the next revision; always later than the current one.
    pub fn next_updated_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        next_revision_time(self.updated_at, now)
    }
}

pub fn next_revision_time(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub tags: Tags,
}
