use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::response::Envelope;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const INVALID_JSON_MESSAGE: &str = "Please provide a valid JSON body";
pub const ARTICLE_NOT_FOUND_MESSAGE: &str = "Article not found";
pub const RESOURCE_NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    /// Storage failures are logged here and never reach the client.
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(_) => Self::article_not_found(),
            ApplicationError::Infrastructure(detail) => {
                tracing::error!(error = %detail, "storage failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.into(),
                )
            }
        }
    }

    pub fn invalid_json() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_JSON_MESSAGE.into())
    }

    pub fn article_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ARTICLE_NOT_FOUND_MESSAGE.into())
    }

    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, RESOURCE_NOT_FOUND_MESSAGE.into())
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            METHOD_NOT_ALLOWED_MESSAGE.into(),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::error(self.message))).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_passed_through() {
        let err = HttpError::from_error(ApplicationError::validation("title: too short."));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "title: too short.");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = HttpError::from_error(ApplicationError::not_found("article not found"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), ARTICLE_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn storage_detail_is_hidden() {
        let err = HttpError::from_error(ApplicationError::infrastructure(
            "database error 5: database is locked",
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), INTERNAL_ERROR_MESSAGE);
    }
}
