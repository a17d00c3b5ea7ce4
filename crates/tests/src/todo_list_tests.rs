use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_list_requires_date() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) = common::get(&app, "/api/todos").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Date parameter is required");
}

#[tokio::test]
async fn test_list_empty_date_is_missing() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) = common::get(&app, "/api/todos?date=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Date parameter is required");
}

#[tokio::test]
async fn test_list_malformed_date() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) = common::get(&app, "/api/todos?date=tomorrow").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "ValidationError");
}

#[tokio::test]
async fn test_list_unused_day_is_empty() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) = common::get(&app, "/api/todos?date=2030-06-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_filters_by_exact_day() {
    let (app, _store, _guard) = common::test_app().await;

    let created = common::create_todo(&app, "Today", "Ana", "2025-01-01").await;
    common::create_todo(&app, "Tomorrow", "Ana", "2025-01-02").await;

    let (status, response) = common::get(&app, "/api/todos?date=2025-01-01").await;

    assert_eq!(status, StatusCode::OK);
    let todos = response.as_array().expect("array");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0], created);
}

#[tokio::test]
async fn test_list_newest_first() {
    let (app, _store, _guard) = common::test_app().await;

    common::create_todo(&app, "first", "Ana", "2025-01-01").await;
    common::create_todo(&app, "second", "Ben", "2025-01-01").await;
    common::create_todo(&app, "third", "Ana", "2025-01-01").await;

    let (_, response) = common::get(&app, "/api/todos?date=2025-01-01").await;

    let texts: Vec<&str> = response
        .as_array()
        .expect("array")
        .iter()
        .map(|t| t["text"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(texts, vec!["third", "second", "first"]);
}
