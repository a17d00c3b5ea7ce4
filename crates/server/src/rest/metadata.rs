use axum::{extract::State, Json};

use shared_types::{AppError, DeadlineResponse, SetDeadlineRequest};
use crate::error_convert::ValidateRequest;
use crate::extract::JsonBody;
use crate::store::TodoStore;

// ---------------------------------------------------------------------------
// GET /api/metadata/deadline
// ---------------------------------------------------------------------------

/// Current shared deadline, or `18:00` when none has been set.
#[utoipa::path(
    get,
    path = "/api/metadata/deadline",
    responses(
        (status = 200, description = "Current deadline", body = DeadlineResponse)
    ),
    tag = "metadata"
)]
pub async fn get_deadline(State(store): State<TodoStore>) -> Result<Json<DeadlineResponse>, AppError> {
    let setting = store.find_deadline().await?;
    Ok(Json(DeadlineResponse::from(setting)))
}

// ---------------------------------------------------------------------------
// POST /api/metadata/deadline
// ---------------------------------------------------------------------------

/// Store the shared deadline. The value is not format-checked here.
#[utoipa::path(
    post,
    path = "/api/metadata/deadline",
    request_body = SetDeadlineRequest,
    responses(
        (status = 200, description = "Deadline stored", body = DeadlineResponse),
        (status = 400, description = "Missing deadline", body = AppError)
    ),
    tag = "metadata"
)]
pub async fn set_deadline(
    State(store): State<TodoStore>,
    JsonBody(body): JsonBody<SetDeadlineRequest>,
) -> Result<Json<DeadlineResponse>, AppError> {
    body.validate_request()?;
    let deadline = body.deadline_value()?;
    let setting = store.upsert_deadline(deadline).await?;

    tracing::info!(deadline = %setting.deadline, "Deadline updated");
    Ok(Json(DeadlineResponse::new(setting.deadline)))
}
