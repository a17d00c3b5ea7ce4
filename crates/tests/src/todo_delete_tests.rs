use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_delete_todo_success() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Clean fridge", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    let (status, response) = common::delete(&app, &format!("/api/todos/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Todo deleted successfully");

    let (_, listed) = common::get(&app, "/api/todos?date=2025-01-01").await;
    assert_eq!(listed, serde_json::json!([]));
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let (app, _store, _guard) = common::test_app().await;
    let todo = common::create_todo(&app, "Sweep porch", "Ana", "2025-01-01").await;
    let id = todo["id"].as_str().unwrap();

    common::delete(&app, &format!("/api/todos/{id}")).await;
    let (status, response) = common::delete(&app, &format!("/api/todos/{id}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"], "Todo not found");
}

#[tokio::test]
async fn test_delete_leaves_other_todos() {
    let (app, _store, _guard) = common::test_app().await;
    let gone = common::create_todo(&app, "Gone", "Ana", "2025-01-01").await;
    common::create_todo(&app, "Stays", "Ben", "2025-01-01").await;
    let id = gone["id"].as_str().unwrap();

    common::delete(&app, &format!("/api/todos/{id}")).await;

    let (_, listed) = common::get(&app, "/api/todos?date=2025-01-01").await;
    let todos = listed.as_array().expect("array");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["text"], "Stays");
}

#[tokio::test]
async fn test_delete_malformed_id() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, _) = common::delete(&app, "/api/todos/12345").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
