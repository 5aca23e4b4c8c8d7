// tests/support/helpers.rs
use super::clock::StepClock;
use article_api::application::services::ApplicationServices;
use article_api::domain::article::ArticleRepository;
use article_api::infrastructure::repositories::InMemoryArticleRepository;
use article_api::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn router_with_repo(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(repo));
    build_router(HttpState::new(services), &RouterSettings::default())
}

/// Router over a fresh in-memory store.
pub fn make_test_router() -> axum::Router {
    let repo = Arc::new(InMemoryArticleRepository::new(Arc::new(StepClock::default())));
    router_with_repo(repo)
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_json_request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a request and return the status with the decoded JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice(&bytes).expect("expected a JSON body");
    (status, json)
}

/// Create an article through the API and return its id.
pub async fn create_article(app: &axum::Router, title: &str, tags: &[&str]) -> i64 {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/articles",
            serde_json::json!({
                "title": title,
                "content": "lorem ipsum dolor sit amet",
                "tags": tags,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    body["data"]["article"]["id"].as_i64().expect("article id")
}

/// Assert the error envelope shape and message.
pub fn assert_error_envelope(body: &Value, expected_message: &str) {
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], expected_message);
    assert!(body.get("data").is_none());
}
