pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use listing::{ArticleFilter, PaginationData, Paging};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle, Tag, Tags};
