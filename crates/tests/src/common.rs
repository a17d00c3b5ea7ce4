use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::store::TodoStore;
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Global mutex ensuring tests run sequentially when they share a database.
/// Each test acquires this lock before truncating, preventing concurrent
/// tests from interfering with each other's data.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

/// Build a test router.
///
/// With `TEST_DATABASE_URL` set, the router is backed by Postgres and every
/// table is truncated first. Otherwise each test gets a fresh in-memory store.
/// The returned `MutexGuard` must be held for the duration of the test.
pub async fn test_app() -> (Router, TodoStore, tokio::sync::MutexGuard<'static, ()>) {
    // Held until the test completes
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();

    let store = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect(&url)
                .await
                .expect("Failed to connect to test database");

            server::db::run_migrations(&pool)
                .await
                .expect("Failed to run migrations");

            sqlx::query("TRUNCATE todos, metadata")
                .execute(&pool)
                .await
                .expect("Failed to truncate");

            TodoStore::Postgres(pool)
        }
        _ => TodoStore::memory(),
    };

    let router = server::openapi::api_router(store.clone());
    (router, store, guard)
}

/// Create a to-do through the API and return its JSON.
pub async fn create_todo(app: &Router, text: &str, created_by: &str, date: &str) -> Value {
    let body = serde_json::json!({
        "text": text,
        "createdBy": created_by,
        "date": date,
    });
    let (status, response) = post_json(app, "/api/todos", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {response}");
    response
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// PUT JSON to a route.
pub async fn put_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// DELETE a route.
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}
