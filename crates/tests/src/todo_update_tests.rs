use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_update_toggles_completed() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Vacuum", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    let (status, response) = common::put_json(
        &app,
        &format!("/api/todo/{id}"),
        r#"{"completed":true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["completed"], true);
    assert_eq!(response["text"], "Vacuum");
    assert_eq!(response["createdAt"], todo["createdAt"]);
}

#[tokio::test]
async fn test_update_text_leaves_other_fields() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Vacum", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    let (status, response) = common::put_json(
        &app,
        &format!("/api/todo/{id}"),
        r#"{"text":"Vacuum"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["text"], "Vacuum");
    assert_eq!(response["createdBy"], "Ana");
    assert_eq!(response["completed"], false);
    assert_eq!(response["date"], "2025-01-01");
}

#[tokio::test]
async fn test_update_full_record_round_trip() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Dust shelves", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    let mut edited = todo.clone();
    edited["completed"] = serde_json::json!(true);
    edited["id"] = serde_json::json!("ignored");

    let (status, response) =
        common::put_json(&app, &format!("/api/todo/{id}"), &edited.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["id"], todo["id"]);
    assert_eq!(response["completed"], true);
}

#[tokio::test]
async fn test_update_is_visible_in_listing() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Laundry", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    common::put_json(&app, &format!("/api/todo/{id}"), r#"{"completed":true}"#).await;

    let (_, listed) = common::get(&app, "/api/todos?date=2025-01-01").await;
    assert_eq!(listed[0]["completed"], true);
}

#[tokio::test]
async fn test_update_moves_to_other_day() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Groceries", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    let (status, _) =
        common::put_json(&app, &format!("/api/todo/{id}"), r#"{"date":"2025-01-02"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let (_, old_day) = common::get(&app, "/api/todos?date=2025-01-01").await;
    let (_, new_day) = common::get(&app, "/api/todos?date=2025-01-02").await;
    assert_eq!(old_day, serde_json::json!([]));
    assert_eq!(new_day.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_update_empty_body_returns_record() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Iron shirts", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    let (status, response) = common::put_json(&app, &format!("/api/todo/{id}"), "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, todo);
}

#[tokio::test]
async fn test_update_blank_text_rejected() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Wash car", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    let (status, response) =
        common::put_json(&app, &format!("/api/todo/{id}"), r#"{"text":"   "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["fieldErrors"].get("text").is_some());

    let (_, listed) = common::get(&app, "/api/todos?date=2025-01-01").await;
    assert_eq!(listed[0]["text"], "Wash car");
}

#[tokio::test]
async fn test_update_wrong_field_type() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Wash car", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    let (status, response) =
        common::put_json(&app, &format!("/api/todo/{id}"), r#"{"completed":"yes"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "ValidationError");

    let (_, listed) = common::get(&app, "/api/todos?date=2025-01-01").await;
    assert_eq!(listed[0], todo);
}

#[tokio::test]
async fn test_update_unknown_id() {
    let (app, _store, _guard) = common::test_app().await;

    let id = uuid::Uuid::new_v4();
    let (status, response) =
        common::put_json(&app, &format!("/api/todo/{id}"), r#"{"completed":true}"#).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"], "Todo not found");
}

#[tokio::test]
async fn test_update_malformed_id() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) =
        common::put_json(&app, "/api/todo/not-a-uuid", r#"{"completed":true}"#).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["kind"], "NotFound");
}
