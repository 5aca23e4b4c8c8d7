// src/presentation/http/extractors.rs
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// JSON body whose rejections all become the generic 400 envelope. The body is
/// never echoed back.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                Err(HttpError::invalid_json())
            }
        }
    }
}

/// `{id}` path segment of an article route. Anything that is not a positive
/// integer is rejected as a missing article before the body is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleIdPath(pub i64);

impl ArticleIdPath {
    pub fn parse(raw: &str) -> Result<Self, HttpError> {
        raw.parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or_else(HttpError::article_not_found)
    }
}

impl<S> FromRequestParts<S> for ArticleIdPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::article_not_found())?;
        Self::parse(&raw)
    }
}
