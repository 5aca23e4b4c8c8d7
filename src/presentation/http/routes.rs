// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    error::HttpError,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, StatusCode},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Router-level settings taken from `AppConfig`.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub base_path: String,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            base_path: "/api".into(),
            allowed_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

pub fn article_routes() -> Router {
    Router::new()
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .patch(articles::update_article)
                .delete(articles::delete_article),
        )
        .method_not_allowed_fallback(method_not_allowed)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, settings: &RouterSettings) -> Router {
    let base_path = settings.base_path.trim_end_matches('/');

    let router = Router::new()
        .route("/health", get(health))
        .merge(openapi::docs_router(base_path));

    let router = if base_path.is_empty() {
        router.merge(article_routes())
    } else {
        router.nest(base_path, article_routes())
    };

    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            settings.request_timeout,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn not_found() -> HttpError {
    HttpError::route_not_found()
}

async fn method_not_allowed() -> HttpError {
    HttpError::method_not_allowed()
}
