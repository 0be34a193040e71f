// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use blog_api::application::ports::time::Clock;
use blog_api::application::services::ApplicationServices;
use blog_api::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use blog_api::infrastructure::repositories::InMemoryArticleRepository;
use blog_api::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Services over a fresh in-memory store and the given clock.
pub fn build_services(clock: Arc<dyn Clock>) -> ApplicationServices {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = repo;
    ApplicationServices::new(write_repo, read_repo, clock)
}

pub fn make_test_router() -> axum::Router {
    let services = Arc::new(build_services(Arc::new(mocks::SteppingClock::new())));
    build_router(HttpState { services })
}

/// Router whose store fails every call.
pub fn make_failing_router() -> axum::Router {
    let repo = Arc::new(mocks::FailingArticleRepo);
    let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = repo;
    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        Arc::new(mocks::DummyClock),
    ));
    build_router(HttpState { services })
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read the body as JSON, asserting a JSON content type first.
pub async fn read_json(resp: axum::response::Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
