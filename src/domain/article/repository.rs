use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::listing::{ArticleFilter, PaginationData, Paging};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage capability for articles. The implementation owns `id`,
/// `published_at` and `updated_at`.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn create(&self, article: NewArticle) -> DomainResult<Article>;

    /// Fails with `DomainError::NotFound` when no row matches.
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article>;

    /// Newest first. The page and the total are read separately, so they may
    /// disagree briefly under concurrent writes.
    async fn list(
        &self,
        filter: &ArticleFilter,
        paging: Paging,
    ) -> DomainResult<(Vec<Article>, PaginationData)>;

    /// Replaces title, content and tags and refreshes `updated_at`.
    async fn update(&self, article: Article) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
