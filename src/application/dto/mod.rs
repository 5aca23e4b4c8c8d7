pub mod articles;
pub mod pagination;

pub use articles::{ArticleDto, ArticlePage};
pub use pagination::PaginationDto;
