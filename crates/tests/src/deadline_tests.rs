use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_deadline_defaults_to_six_pm() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) = common::get(&app, "/api/metadata/deadline").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, serde_json::json!({ "deadline": "18:00" }));
}

#[tokio::test]
async fn test_set_deadline_then_read_back() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) =
        common::post_json(&app, "/api/metadata/deadline", r#"{"deadline":"20:30"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["deadline"], "20:30");

    let (_, response) = common::get(&app, "/api/metadata/deadline").await;
    assert_eq!(response["deadline"], "20:30");
}

#[tokio::test]
async fn test_last_deadline_write_wins() {
    let (app, _store, _guard) = common::test_app().await;

    common::post_json(&app, "/api/metadata/deadline", r#"{"deadline":"07:00"}"#).await;
    common::post_json(&app, "/api/metadata/deadline", r#"{"deadline":"21:45"}"#).await;

    let (_, response) = common::get(&app, "/api/metadata/deadline").await;
    assert_eq!(response["deadline"], "21:45");
}

#[tokio::test]
async fn test_set_deadline_stores_value_verbatim() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) =
        common::post_json(&app, "/api/metadata/deadline", r#"{"deadline":"9:5"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["deadline"], "9:5");
}

#[tokio::test]
async fn test_set_deadline_requires_value() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) = common::post_json(&app, "/api/metadata/deadline", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "ValidationError");

    let (_, response) = common::get(&app, "/api/metadata/deadline").await;
    assert_eq!(response["deadline"], "18:00");
}

#[tokio::test]
async fn test_set_deadline_malformed_body() {
    let (app, _store, _guard) = common::test_app().await;

    let (status, response) =
        common::post_json(&app, "/api/metadata/deadline", r#"{"deadline":1800}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "ValidationError");
    assert!(response.get("error").is_some());
}
