use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

use crate::AppError;

/// Wire format for calendar days.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// A household to-do filed under exactly one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Parse a `YYYY-MM-DD` calendar day, reporting failures against `field`.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    let value = value.trim();
    if value.len() != 10 {
        return Err(AppError::invalid_field(field, format!("{field} must be YYYY-MM-DD")));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::invalid_field(field, format!("{field} must be YYYY-MM-DD")))
}

/// Format a calendar day the way the API expects it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Trimmed value of a field that must be present and non-blank.
fn present<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, AppError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::invalid_field(field, format!("{field} is required")))
}

#[cfg(feature = "validation")]
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

#[cfg(feature = "validation")]
fn calendar_day(value: &str) -> Result<(), ValidationError> {
    parse_date("date", value)
        .map(|_| ())
        .map_err(|e| ValidationError::new("calendar_day").with_message(e.message.into()))
}

// ---------------------------------------------------------------------------
// Request/Response DTOs
// ---------------------------------------------------------------------------

/// Request body for creating a to-do.
///
/// Every field is optional on the wire so that a missing field surfaces as
/// a 400 with field errors instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "text is required"), custom(function = "not_blank"))
    )]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "createdBy is required"), custom(function = "not_blank"))
    )]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "date is required"), custom(function = "calendar_day"))
    )]
    pub date: Option<String>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub text: String,
    pub created_by: String,
    pub date: NaiveDate,
}

impl CreateTodoRequest {
    pub fn new(text: impl Into<String>, created_by: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            text: Some(text.into()),
            created_by: Some(created_by.into()),
            date: Some(format_date(date)),
        }
    }

    /// Trim the fields and parse the date.
    pub fn to_new_todo(&self) -> Result<NewTodo, AppError> {
        let text = present("text", self.text.as_deref())?;
        let created_by = present("createdBy", self.created_by.as_deref())?;
        let date = parse_date("date", present("date", self.date.as_deref())?)?;
        Ok(NewTodo {
            text: text.to_string(),
            created_by: created_by.to_string(),
            date,
        })
    }
}

/// Request body for a partial update.
///
/// Fields that are absent are left untouched. Anything else the client sends
/// back (`id`, `createdAt`) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "validation", validate(custom(function = "not_blank")))]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "validation", validate(custom(function = "not_blank")))]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "validation", validate(custom(function = "calendar_day")))]
    pub date: Option<String>,
}

/// A validated set of field changes for one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub created_by: Option<String>,
    pub completed: Option<bool>,
    pub date: Option<NaiveDate>,
}

impl UpdateTodoRequest {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Trim the present fields and parse the date.
    pub fn to_patch(&self) -> Result<TodoPatch, AppError> {
        let text = match self.text.as_deref() {
            Some(raw) => Some(present("text", Some(raw))?.to_string()),
            None => None,
        };
        let created_by = match self.created_by.as_deref() {
            Some(raw) => Some(present("createdBy", Some(raw))?.to_string()),
            None => None,
        };
        let date = match self.date.as_deref() {
            Some(raw) => Some(parse_date("date", raw)?),
            None => None,
        };

        Ok(TodoPatch {
            text,
            created_by,
            completed: self.completed,
            date,
        })
    }
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.created_by.is_none()
            && self.completed.is_none()
            && self.date.is_none()
    }

    /// Merge the present fields into `todo`. `id` and `created_at` never change.
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(text) = &self.text {
            todo.text = text.clone();
        }
        if let Some(created_by) = &self.created_by {
            todo.created_by = created_by.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(date) = self.date {
            todo.date = date;
        }
    }
}

/// Generic confirmation body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
