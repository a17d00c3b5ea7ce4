use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_create_todo_success() {
    let (app, _store, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "text": "Take out recycling",
        "createdBy": "Ana",
        "date": "2025-01-01"
    });

    let (status, response) = common::post_json(&app, "/api/todos", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(response.get("id").is_some(), "Response should contain todo ID");
    assert!(response.get("createdAt").is_some(), "Response should carry createdAt");
    assert_eq!(response["text"], "Take out recycling");
    assert_eq!(response["createdBy"], "Ana");
    assert_eq!(response["completed"], false);
    assert_eq!(response["date"], "2025-01-01");
}

#[tokio::test]
async fn test_create_todo_trims_text() {
    let (app, _store, _guard) = common::test_app().await;

    let response = common::create_todo(&app, "  Buy milk  ", "Ana", "2025-01-01").await;
    assert_eq!(response["text"], "Buy milk");
}

#[tokio::test]
async fn test_create_todo_ignores_client_completed_flag() {
    let (app, _store, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "text": "Mop floor",
        "createdBy": "Ana",
        "date": "2025-01-01",
        "completed": true
    });
    let (status, response) = common::post_json(&app, "/api/todos", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["completed"], false);
}

#[tokio::test]
async fn test_create_todo_missing_text() {
    let (app, _store, _guard) = common::test_app().await;

    let body = serde_json::json!({ "createdBy": "Ana", "date": "2025-01-01" });
    let (status, response) = common::post_json(&app, "/api/todos", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Missing required fields");
    assert_eq!(response["kind"], "ValidationError");
    assert!(response["fieldErrors"].get("text").is_some());
}

#[tokio::test]
async fn test_create_todo_blank_fields_are_missing() {
    let (app, _store, _guard) = common::test_app().await;

    let body = serde_json::json!({ "text": "   ", "createdBy": "", "date": "2025-01-01" });
    let (status, response) = common::post_json(&app, "/api/todos", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["fieldErrors"].get("text").is_some());
    assert!(response["fieldErrors"].get("createdBy").is_some());
}

#[tokio::test]
async fn test_create_todo_missing_date() {
    let (app, _store, _guard) = common::test_app().await;

    let body = serde_json::json!({ "text": "Feed cat", "createdBy": "Ana" });
    let (status, response) = common::post_json(&app, "/api/todos", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Missing required fields");
    assert!(response["fieldErrors"].get("date").is_some());
}

#[tokio::test]
async fn test_create_todo_malformed_date() {
    let (app, _store, _guard) = common::test_app().await;

    let body = serde_json::json!({ "text": "Feed cat", "createdBy": "Ana", "date": "01/02/2025" });
    let (status, response) = common::post_json(&app, "/api/todos", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["fieldErrors"].get("date").is_some());
}

#[tokio::test]
async fn test_failed_create_stores_nothing() {
    let (app, _store, _guard) = common::test_app().await;

    let body = serde_json::json!({ "createdBy": "Ana", "date": "2025-01-01" });
    common::post_json(&app, "/api/todos", &body.to_string()).await;

    let (status, response) = common::get(&app, "/api/todos?date=2025-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, serde_json::json!([]));
}

#[tokio::test]
async fn test_create_todo_wrong_field_type() {
    let (app, _store, _guard) = common::test_app().await;

    let body = r#"{"text":5,"createdBy":"Ana","date":"2025-01-01"}"#;
    let (status, response) = common::post_json(&app, "/api/todos", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "ValidationError");
    assert_eq!(response["error"], "Request body has invalid field types");
}

#[tokio::test]
async fn test_create_todo_empty_body() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) = common::post_json(&app, "/api/todos", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "ValidationError");
    assert_eq!(response["error"], "Request body is not valid JSON");
}

#[tokio::test]
async fn test_create_todo_without_json_content_type() {
    let (app, _store, _guard) = common::test_app().await;

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/todos")
        .body(axum::body::Body::from(
            r#"{"text":"Feed cat","createdBy":"Ana","date":"2025-01-01"}"#,
        ))
        .unwrap();
    let (status, response) = common::send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "ValidationError");
}
