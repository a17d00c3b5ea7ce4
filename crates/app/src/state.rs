use chrono::{Duration, NaiveDate, NaiveTime};
use shared_types::rollover::parse_deadline;
use shared_types::{Todo, DEFAULT_DEADLINE};
use uuid::Uuid;

/// Name attached to to-dos when no username has been saved.
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Message shown to the user until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Everything the screens render from.
///
/// Transitions consume the value and return the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientState {
    pub username: Option<String>,
    pub selected_date: NaiveDate,
    /// To-dos for `selected_date`, as last fetched.
    pub todos: Vec<Todo>,
    /// Raw `HH:mm` string as stored by the server.
    pub deadline: String,
    pub is_fetching: bool,
    pub notice: Option<Notice>,
}

impl ClientState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            username: None,
            selected_date: today,
            todos: Vec::new(),
            deadline: DEFAULT_DEADLINE.to_string(),
            is_fetching: false,
            notice: None,
        }
    }

    pub fn with_username(self, username: Option<String>) -> Self {
        Self { username, ..self }
    }

    pub fn select_date(self, selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            ..self
        }
    }

    /// Move the selected day by `days`, across month and year ends.
    pub fn shift_date(self, days: i64) -> Self {
        let date = self
            .selected_date
            .checked_add_signed(Duration::days(days))
            .unwrap_or(self.selected_date);
        self.select_date(date)
    }

    pub fn begin_fetch(self) -> Self {
        Self {
            is_fetching: true,
            ..self
        }
    }

    /// Replace the cached list with a fresh fetch.
    pub fn finish_fetch(self, todos: Vec<Todo>) -> Self {
        Self {
            todos,
            is_fetching: false,
            ..self
        }
    }

    /// End a fetch that failed, keeping the previous list.
    pub fn cancel_fetch(self) -> Self {
        Self {
            is_fetching: false,
            ..self
        }
    }

    pub fn with_deadline(self, deadline: impl Into<String>) -> Self {
        Self {
            deadline: deadline.into(),
            ..self
        }
    }

    pub fn with_notice(self, notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            ..self
        }
    }

    pub fn clear_notice(self) -> Self {
        Self {
            notice: None,
            ..self
        }
    }

    /// Name sent as `createdBy`.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(ANONYMOUS)
    }

    pub fn find_todo(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// The deadline as a time of day. A stored value that does not parse
    /// counts as the default.
    pub fn deadline_time(&self) -> NaiveTime {
        parse_deadline(&self.deadline)
            .or_else(|_| parse_deadline(DEFAULT_DEADLINE))
            .unwrap_or(NaiveTime::default())
    }
}
