use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use shared_types::AppError;

/// JSON request body whose rejections are reported as `AppError`.
///
/// Bodies that fail to parse, have the wrong field types, or arrive without a
/// JSON content type all become a 400 `ValidationError`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection_to_app_error(&rejection)),
        }
    }
}

fn rejection_to_app_error(rejection: &JsonRejection) -> AppError {
    tracing::debug!(detail = %rejection.body_text(), "Rejected request body");
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => "Expected a JSON request body",
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON",
        JsonRejection::JsonDataError(_) => "Request body has invalid field types",
        _ => "Invalid request body",
    };
    AppError::validation(message, HashMap::new())
}
