use super::map_sqlx;
use crate::application::ports::ClockPort;
use crate::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticleRepository, ArticleTitle,
    NewArticle, PaginationData, Paging, Tags,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, content, tags, published_at, updated_at";

/// Encodes tags for the `tags` TEXT column as a JSON array.
pub fn encode_tags(tags: &Tags) -> DomainResult<String> {
    serde_json::to_string(&tags.to_strings())
        .map_err(|err| DomainError::Persistence(format!("failed to encode tags: {err}")))
}

fn encode_filter(filter: &ArticleFilter) -> DomainResult<Option<String>> {
    if filter.is_empty() {
        return Ok(None);
    }
    serde_json::to_string(&filter.tags)
        .map(Some)
        .map_err(|err| DomainError::Persistence(format!("failed to encode tag filter: {err}")))
}

/// Decodes the `tags` column. `NULL` reads as no tags.
pub fn decode_tags(raw: Option<&str>) -> DomainResult<Tags> {
    let Some(raw) = raw else {
        return Ok(Tags::default());
    };
    let values: Vec<String> = serde_json::from_str(raw)
        .map_err(|err| DomainError::Persistence(format!("failed to decode tags: {err}")))?;
    Tags::new(values).map_err(corrupt_row)
}

fn corrupt_row(err: DomainError) -> DomainError {
    DomainError::Persistence(format!("stored article is invalid: {err}"))
}

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: SqlitePool,
    clock: Arc<ClockPort>,
}

impl SqliteArticleRepository {
    pub fn new(pool: SqlitePool, clock: Arc<ClockPort>) -> Self {
        Self { pool, clock }
    }

    /// Matches rows sharing at least one tag with `wanted`. The whole filter
    /// is one bound JSON array, whatever its length.
    fn apply_filter(builder: &mut QueryBuilder<'_, Sqlite>, wanted: Option<&str>) {
        let Some(wanted) = wanted else {
            return;
        };

        builder.push(
            " WHERE EXISTS (SELECT 1 FROM json_each(articles.tags) AS t \
             JOIN json_each(",
        );
        builder.push_bind(wanted.to_owned());
        builder.push(") AS f ON t.value = f.value)");
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    tags: Option<String>,
    published_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id).map_err(corrupt_row)?,
            title: ArticleTitle::new(row.title).map_err(corrupt_row)?,
            content: ArticleContent::new(row.content).map_err(corrupt_row)?,
            tags: decode_tags(row.tags.as_deref())?,
            published_at: row.published_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn create(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            tags,
        } = article;
        let tags = encode_tags(&tags)?;
        let now = self.clock.now();

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, tags, published_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(tags)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(DomainError::article_not_found)?;

        Article::try_from(row)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        paging: Paging,
    ) -> DomainResult<(Vec<Article>, PaginationData)> {
        let wanted = encode_filter(filter)?;

        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_filter(&mut list_builder, wanted.as_deref());
        list_builder.push(" ORDER BY published_at DESC, id DESC LIMIT ");
        list_builder.push_bind(paging.limit());
        list_builder.push(" OFFSET ");
        list_builder.push_bind(paging.offset());

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles");
        Self::apply_filter(&mut count_builder, wanted.as_deref());

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let pagination =
            PaginationData::build(paging, articles.len(), u64::try_from(total).unwrap_or(0));
        Ok((articles, pagination))
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let updated_at = article.next_updated_at(self.clock.now());
        let tags = encode_tags(&article.tags)?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = ?, content = ?, tags = ?, updated_at = ? WHERE id = ? RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(tags)
        .bind(updated_at)
        .bind(i64::from(article.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(DomainError::article_not_found)?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::article_not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_json_text() {
        let tags = Tags::new(["go", "food"]).unwrap();
        let encoded = encode_tags(&tags).unwrap();
        assert_eq!(encoded, r#"["go","food"]"#);
        assert_eq!(decode_tags(Some(&encoded)).unwrap(), tags);
    }

    #[test]
    fn empty_and_null_columns_decode_to_no_tags() {
        assert_eq!(encode_tags(&Tags::default()).unwrap(), "[]");
        assert!(decode_tags(None).unwrap().is_empty());
        assert!(decode_tags(Some("[]")).unwrap().is_empty());
    }

    #[test]
    fn filter_is_encoded_as_one_json_array() {
        assert_eq!(encode_filter(&ArticleFilter::default()).unwrap(), None);
        let filter = ArticleFilter::new(vec!["go".into(), "food".into()]);
        assert_eq!(
            encode_filter(&filter).unwrap().as_deref(),
            Some(r#"["go","food"]"#)
        );
    }

    #[test]
    fn malformed_column_is_a_persistence_error() {
        assert!(matches!(
            decode_tags(Some("not json")),
            Err(DomainError::Persistence(_))
        ));
    }
}
