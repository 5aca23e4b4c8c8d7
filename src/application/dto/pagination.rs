use crate::domain::article::PaginationData;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    #[schema(example = 1)]
    pub current_page: i64,
    #[schema(example = 2)]
    pub total_pages: i64,
    #[schema(example = 25)]
    pub item_count: i64,
    #[schema(example = 40)]
    pub total_items: i64,
    #[schema(example = 25)]
    pub per_page: i64,
}

impl From<PaginationData> for PaginationDto {
    fn from(data: PaginationData) -> Self {
        Self {
            current_page: data.current_page,
            total_pages: data.total_pages,
            item_count: data.item_count,
            total_items: data.total_items,
            per_page: data.per_page,
        }
    }
}
