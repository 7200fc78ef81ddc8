//! Integration tests for the liveness endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_reports_ok_and_crate_version() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_does_not_draw_from_shared_engine() {
    // An empty sequence panics on the first draw.
    let app = common::build_test_app_with_sequence(Vec::new());

    let (status, _) = common::get_json(app.clone(), "/health").await;
    let (again, _) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, StatusCode::OK);
}

#[tokio::test]
async fn test_rolls_path_without_handler_returns_404() {
    let app = common::build_test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/rolls/unknown")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(r#"{"min":1,"max":6}"#))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
