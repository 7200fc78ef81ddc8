//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fateweaver_core::RandomEngine;
use fateweaver_test_support::{FixedEngine, SequenceEngine};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fateweaver_api::build_router;
use fateweaver_api::state::AppState;

/// Build the full app router around `engine`.
pub fn build_test_app_with_engine(engine: impl RandomEngine + 'static) -> Router {
    build_router(AppState::new(Box::new(engine)))
}

/// Build the full app router with a shared engine that always returns 10.
pub fn build_test_app() -> Router {
    build_test_app_with_engine(FixedEngine(10))
}

/// Build the full app router with a shared engine that replays `values`.
pub fn build_test_app_with_sequence(values: Vec<i64>) -> Router {
    build_test_app_with_engine(SequenceEngine::new(values))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
