// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use outcome_core::application::ports::ChancePort;
use outcome_core::application::services::ApplicationServices;
use outcome_core::application::timing::Timing;
use outcome_core::domain::configuration::ConfigurationStore;
use outcome_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const SOME_ID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

pub fn build_services(
    store: Arc<dyn ConfigurationStore>,
    chance: Arc<ChancePort>,
) -> ApplicationServices {
    ApplicationServices::new(store, chance, Timing::instant())
}

pub fn make_test_router(
    store: Arc<dyn ConfigurationStore>,
    chance: Arc<ChancePort>,
) -> axum::Router {
    let services = Arc::new(build_services(store, chance));
    build_router(HttpState { services })
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is a problem document with the expected status and code.
pub async fn assert_problem_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_code: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        ct.starts_with("application/problem+json"),
        "unexpected content-type: {ct}"
    );
    let json = body_json(resp).await;
    assert_eq!(json["status"], expected_status.as_u16());
    assert_eq!(json["detail"], expected_code);
    assert!(
        json["title"].as_str().is_some_and(|t| !t.is_empty()),
        "expected non-empty title"
    );
    json
}
