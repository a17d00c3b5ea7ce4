use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppError;

#[cfg(feature = "validation")]
use validator::Validate;

/// Deadline returned when none has been stored yet.
pub const DEFAULT_DEADLINE: &str = "18:00";

/// The household-wide daily deadline. At most one row exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct DeadlineSetting {
    pub deadline: String,
    pub updated_at: DateTime<Utc>,
}

/// Body of both deadline endpoints' responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeadlineResponse {
    pub deadline: String,
}

impl DeadlineResponse {
    pub fn new(deadline: impl Into<String>) -> Self {
        Self {
            deadline: deadline.into(),
        }
    }
}

impl From<Option<DeadlineSetting>> for DeadlineResponse {
    fn from(setting: Option<DeadlineSetting>) -> Self {
        Self::new(
            setting
                .map(|s| s.deadline)
                .unwrap_or_else(|| DEFAULT_DEADLINE.to_string()),
        )
    }
}

/// Request body for `POST /api/metadata/deadline`.
///
/// The value is stored as given; `HH:mm` checking happens in the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SetDeadlineRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(
            required(message = "deadline is required"),
            length(min = 1, message = "deadline is required")
        )
    )]
    pub deadline: Option<String>,
}

impl SetDeadlineRequest {
    pub fn new(deadline: impl Into<String>) -> Self {
        Self {
            deadline: Some(deadline.into()),
        }
    }

    /// The value to store. Only presence is checked.
    pub fn deadline_value(&self) -> Result<&str, AppError> {
        self.deadline
            .as_deref()
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::invalid_field("deadline", "deadline is required"))
    }
}
