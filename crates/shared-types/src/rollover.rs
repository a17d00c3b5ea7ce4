//! Deadline/rollover policy.
//!
//! Decides which calendar day a new to-do is filed under. Everything here
//! works on the device's local wall clock: "today" is `now.date()`, and the
//! deadline instant is today's date at the configured time with zero seconds.
//!
//! A day is "after the deadline" only when `now` is strictly later than the
//! deadline instant, so at exactly `18:00:00` with an `18:00` deadline new
//! to-dos still land on today.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::AppError;

/// Parse a deadline written as `H:mm` or `HH:mm` on a 24-hour clock.
///
/// Accepts exactly `^([01]?[0-9]|2[0-3]):[0-5][0-9]$`.
pub fn parse_deadline(value: &str) -> Result<NaiveTime, AppError> {
    let invalid = || {
        AppError::invalid_field("deadline", "Please enter a valid time in HH:mm format")
    };

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hours.len()) || minutes.len() != 2 {
        return Err(invalid());
    }
    if !all_digits(hours) || !all_digits(minutes) {
        return Err(invalid());
    }

    let h: u32 = hours.parse().map_err(|_| invalid())?;
    let m: u32 = minutes.parse().map_err(|_| invalid())?;
    if h > 23 || m > 59 {
        return Err(invalid());
    }
    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(invalid)
}

pub fn is_valid_deadline(value: &str) -> bool {
    parse_deadline(value).is_ok()
}

/// Render a deadline back to its canonical `HH:mm` form.
pub fn format_deadline(deadline: NaiveTime) -> String {
    deadline.format("%H:%M").to_string()
}

/// Whether adding to `selected_date` at `now` counts as late.
///
/// Future days are never late and past days always are. For today, late
/// means strictly after today's deadline instant.
pub fn is_after_deadline(now: NaiveDateTime, selected_date: NaiveDate, deadline: NaiveTime) -> bool {
    let today = now.date();
    if selected_date > today {
        return false;
    }
    if selected_date < today {
        return true;
    }
    now > today.and_time(deadline)
}

/// The day a to-do created at `now` while viewing `selected_date` belongs to.
///
/// Only today's view rolls over: once today's deadline has passed the to-do
/// goes to tomorrow. Any other selected day is kept as is.
pub fn resolve_todo_date(now: NaiveDateTime, selected_date: NaiveDate, deadline: NaiveTime) -> NaiveDate {
    let today = now.date();
    if selected_date == today && is_after_deadline(now, selected_date, deadline) {
        today.succ_opt().unwrap_or(today)
    } else {
        selected_date
    }
}

/// True when `resolve_todo_date` would move the to-do off `selected_date`.
pub fn rolls_over(now: NaiveDateTime, selected_date: NaiveDate, deadline: NaiveTime) -> bool {
    resolve_todo_date(now, selected_date, deadline) != selected_date
}

/// Next instant that is `lead` before a deadline.
///
/// Uses today's deadline unless that reminder is already behind `now`, in
/// which case tomorrow's is returned.
pub fn reminder_time(now: NaiveDateTime, deadline: NaiveTime, lead: Duration) -> NaiveDateTime {
    let today_reminder = now.date().and_time(deadline) - lead;
    if today_reminder < now {
        today_reminder + Duration::days(1)
    } else {
        today_reminder
    }
}
