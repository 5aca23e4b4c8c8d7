// src/infrastructure/repositories/memory_article.rs
use crate::application::ports::ClockPort;
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleRepository, NewArticle, PaginationData, Paging,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    articles: Vec<Article>,
}

/// Process-local article store with the same observable behaviour as the SQL
/// adapter.
pub struct InMemoryArticleRepository {
    state: RwLock<MemoryState>,
    clock: Arc<ClockPort>,
}

impl InMemoryArticleRepository {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
            clock,
        }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn create(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.write().await;
        let id = ArticleId::new(state.last_id + 1)?;
        let now = self.clock.now();

        let created = Article {
            id,
            title: article.title,
            content: article.content,
            tags: article.tags,
            published_at: now,
            updated_at: now,
        };

        state.last_id = i64::from(id);
        state.articles.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let state = self.state.read().await;
        state
            .articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(DomainError::article_not_found)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        paging: Paging,
    ) -> DomainResult<(Vec<Article>, PaginationData)> {
        let state = self.state.read().await;

        let mut matching: Vec<&Article> = state
            .articles
            .iter()
            .filter(|a| filter.is_empty() || a.tags.intersects(&filter.tags))
            .collect();
        matching.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let offset = usize::try_from(paging.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(paging.limit()).unwrap_or(usize::MAX);
        let items: Vec<Article> = matching
            .iter()
            .skip(offset)
            .take(limit)
            .map(|a| (*a).clone())
            .collect();

        let pagination = PaginationData::build(paging, items.len(), matching.len() as u64);
        Ok((items, pagination))
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let mut state = self.state.write().await;
        let now = self.clock.now();
        let stored = state
            .articles
            .iter_mut()
            .find(|a| a.id == article.id)
            .ok_or_else(DomainError::article_not_found)?;

        stored.updated_at = stored.next_updated_at(now);
        stored.title = article.title;
        stored.content = article.content;
        stored.tags = article.tags;
        Ok(stored.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.write().await;
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(DomainError::article_not_found());
        }
        Ok(())
    }
}
