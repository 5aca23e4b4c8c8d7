use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticlePage, PaginationDto},
        error::ApplicationResult,
    },
    domain::article::{
        ArticleFilter, Paging,
        listing::{DEFAULT_PAGE, DEFAULT_PER_PAGE},
        value_objects::normalize_tag,
    },
};

/// Raw listing parameters as they arrive on the query string.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub tags: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListArticlesQuery {
    /// Never fails: unparsable or out-of-range values fall back to defaults.
    pub fn normalize(&self) -> (ArticleFilter, Paging) {
        let tags = match self.tags.as_deref() {
            Some(raw) if !raw.is_empty() => raw.split(',').map(normalize_tag).collect(),
            _ => Vec::new(),
        };

        let page = parse_int(self.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let per_page = parse_int(self.per_page.as_deref()).unwrap_or(DEFAULT_PER_PAGE);

        (ArticleFilter::new(tags), Paging::new(page, per_page))
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok())
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticlePage> {
        let (filter, paging) = query.normalize();

        let (records, pagination) = self.repo.list(&filter, paging).await?;

        Ok(ArticlePage {
            articles: records.into_iter().map(Into::into).collect(),
            pagination: PaginationDto::from(pagination),
        })
    }
}
