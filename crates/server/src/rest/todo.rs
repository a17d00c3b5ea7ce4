use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared_types::{
    parse_date, AppError, CreateTodoRequest, MessageResponse, Todo, UpdateTodoRequest,
};
use crate::error_convert::ValidateRequest;
use crate::extract::JsonBody;
use crate::store::TodoStore;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TodoListParams {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// A malformed id can never match a record, so it is reported the same way
/// as an unknown one.
fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::not_found("Todo not found"))
}

// ---------------------------------------------------------------------------
// GET /api/todos
// ---------------------------------------------------------------------------

/// List the to-dos filed under a calendar day, newest first.
#[utoipa::path(
    get,
    path = "/api/todos",
    params(TodoListParams),
    responses(
        (status = 200, description = "To-dos for the day", body = Vec<Todo>),
        (status = 400, description = "Missing or malformed date", body = AppError)
    ),
    tag = "todos"
)]
pub async fn list_todos(
    State(store): State<TodoStore>,
    Query(params): Query<TodoListParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let raw = params
        .date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::invalid_field("date", "Date parameter is required"))?;
    let date = parse_date("date", raw)?;

    let todos = store.list_by_date(date).await?;
    Ok(Json(todos))
}

// ---------------------------------------------------------------------------
// POST /api/todos
// ---------------------------------------------------------------------------

/// Create a new to-do.
#[utoipa::path(
    post,
    path = "/api/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "To-do created", body = Todo),
        (status = 400, description = "Missing required fields or malformed body", body = AppError)
    ),
    tag = "todos"
)]
pub async fn create_todo(
    State(store): State<TodoStore>,
    JsonBody(body): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    body.validate_request().map_err(|e| e.with_message("Missing required fields"))?;
    let new = body.to_new_todo()?;
    let todo = store.create(&new).await?;

    tracing::info!(todo_id = %todo.id, date = %todo.date, created_by = %todo.created_by, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

// ---------------------------------------------------------------------------
// PUT /api/todo/{id}
// ---------------------------------------------------------------------------

/// Merge the given fields into an existing to-do.
#[utoipa::path(
    put,
    path = "/api/todo/{id}",
    params(
        ("id" = String, Path, description = "Todo UUID")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "To-do updated", body = Todo),
        (status = 400, description = "Invalid field value or malformed body", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "todos"
)]
pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let uuid = parse_id(&id)?;
    body.validate_request().map_err(|e| e.with_message("Invalid update"))?;
    let patch = body.to_patch()?;

    let updated = if patch.is_empty() {
        store.find_by_id(uuid).await?
    } else {
        store.update(uuid, &patch).await?
    };
    let todo = updated.ok_or_else(|| AppError::not_found("Todo not found"))?;

    tracing::info!(todo_id = %todo.id, completed = todo.completed, "Todo updated");
    Ok(Json(todo))
}

// ---------------------------------------------------------------------------
// DELETE /api/todos/{id}
// ---------------------------------------------------------------------------

/// Delete a to-do.
#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    params(
        ("id" = String, Path, description = "Todo UUID")
    ),
    responses(
        (status = 200, description = "To-do deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "todos"
)]
pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let uuid = parse_id(&id)?;

    if store.delete(uuid).await? {
        tracing::info!(todo_id = %uuid, "Todo deleted");
        Ok(Json(MessageResponse::new("Todo deleted successfully")))
    } else {
        Err(AppError::not_found("Todo not found"))
    }
}
