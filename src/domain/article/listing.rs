// src/domain/article/listing.rs
//! Filter, paging window and page metadata for article listings.

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 20;
pub const MAX_PER_PAGE: i64 = 100;

/// Tag constraint for a listing. Empty means every article matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub tags: Vec<String>,
}

impl ArticleFilter {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    page: i64,
    per_page: i64,
}

impl Paging {
    /// Out-of-range inputs are coerced: `page` below 1 becomes 1 and a
    /// `per_page` outside `1..=MAX_PER_PAGE` becomes `MAX_PER_PAGE`.
    pub fn new(page: i64, per_page: i64) -> Self {
        let page = if page <= 0 { DEFAULT_PAGE } else { page };
        let per_page = if per_page <= 0 || per_page > MAX_PER_PAGE {
            MAX_PER_PAGE
        } else {
            per_page
        };
        Self { page, per_page }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationData {
    pub current_page: i64,
    pub per_page: i64,
    pub item_count: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl PaginationData {
    pub fn build(paging: Paging, item_count: usize, total_items: u64) -> Self {
        let per_page = paging.per_page();
        let total_items = i64::try_from(total_items).unwrap_or(i64::MAX);
        let total_pages = if total_items == 0 {
            0
        } else {
            (total_items - 1) / per_page + 1
        };
        Self {
            current_page: paging.page(),
            per_page,
            item_count: i64::try_from(item_count).unwrap_or(i64::MAX),
            total_items,
            total_pages,
        }
    }
}
