// tests/support/mocks.rs
use article_api::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleRepository, NewArticle, PaginationData, Paging,
};
use article_api::domain::errors::{DomainError, DomainResult};

/// Every call fails the way a broken database connection would.
pub struct BrokenArticleRepo;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(
        "error returned from database: disk I/O error".into(),
    ))
}

#[async_trait::async_trait]
impl ArticleRepository for BrokenArticleRepo {
    async fn create(&self, _article: NewArticle) -> DomainResult<Article> {
        broken()
    }
    async fn get_by_id(&self, _id: ArticleId) -> DomainResult<Article> {
        broken()
    }
    async fn list(
        &self,
        _filter: &ArticleFilter,
        _paging: Paging,
    ) -> DomainResult<(Vec<Article>, PaginationData)> {
        broken()
    }
    async fn update(&self, _article: Article) -> DomainResult<Article> {
        broken()
    }
    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        broken()
    }
}
