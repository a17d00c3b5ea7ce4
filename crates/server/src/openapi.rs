use axum::Router;
use shared_types::{
    AppError, AppErrorKind, CreateTodoRequest, DeadlineResponse, MessageResponse,
    SetDeadlineRequest, Todo, UpdateTodoRequest,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health::{self, HealthResponse};
use crate::rest;
use crate::store::TodoStore;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::todo::list_todos,
        rest::todo::create_todo,
        rest::todo::update_todo,
        rest::todo::delete_todo,
        rest::metadata::get_deadline,
        rest::metadata::set_deadline,
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind, Todo, CreateTodoRequest, UpdateTodoRequest,
        MessageResponse, DeadlineResponse, SetDeadlineRequest, HealthResponse,
    )),
    tags(
        (name = "todos", description = "Household to-dos filed by calendar day"),
        (name = "metadata", description = "Shared daily deadline"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Household Todo API",
        description = "Shared household to-do list with a daily deadline",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router(store: TodoStore) -> Router {
    let state = AppState::new(store);

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
