use crate::domain::errors::DomainError;

/// Driver failures stay opaque; only a missing row has a meaning of its own.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::article_not_found(),
        sqlx::Error::Database(db_err) => {
            let detail = match db_err.code() {
                Some(code) => format!("database error {code}: {}", db_err.message()),
                None => db_err.message().to_string(),
            };
            DomainError::Persistence(detail)
        }
        other => DomainError::Persistence(other.to_string()),
    }
}
