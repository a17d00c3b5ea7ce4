pub mod metadata;
pub mod todo;

use axum::{routing::{get, put, delete}, Router};
use crate::db::AppState;

/// Build the REST API router.
///
/// Paths mirror the mobile client: list and create share `/api/todos`,
/// update lives under the singular `/api/todo/{id}`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Todos
        .route("/api/todos", get(todo::list_todos).post(todo::create_todo))
        .route("/api/todo/{id}", put(todo::update_todo))
        .route("/api/todos/{id}", delete(todo::delete_todo))
        // Metadata
        .route(
            "/api/metadata/deadline",
            get(metadata::get_deadline).post(metadata::set_deadline),
        )
}
