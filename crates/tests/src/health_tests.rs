use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_health_reports_backend() {
    let (app, store, _guard) = common::test_app().await;

    let (status, response) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "ok");
    assert_eq!(response["store"], store.backend());
    assert_eq!(response["db"], "connected");
}

#[tokio::test]
async fn test_docs_are_served() {
    let (app, _store, _guard) = common::test_app().await;

    let req = Request::builder()
        .method("GET")
        .uri("/docs")
        .body(Body::empty())
        .unwrap();
    let (status, body) = common::send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().is_some_and(|html| html.contains("html")));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (app, _store, _guard) = common::test_app().await;
    let app = server::middleware::apply(app, &shared_types::FeatureFlags::default());

    let req = Request::builder()
        .method("GET")
        .uri("/api/metadata/deadline")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, req)
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("abc-123")
    );
}
