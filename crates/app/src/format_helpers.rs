//! Shared formatting utilities for the UI layer.
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Format a calendar day as "Wed, Jan 1".
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Format a time of day on a 12-hour clock, e.g. "9:35 PM".
pub fn format_time_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Creation time of a to-do in the device's local zone.
pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    format_time_12h(created_at.with_timezone(&Local).time())
}

/// "Today", "Tomorrow", "Yesterday" or the day label.
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => format_day_label(date),
    }
}

/// Reminder instant, shown next to the deadline. Day is omitted when it is today.
pub fn format_reminder(reminder: NaiveDateTime, today: NaiveDate) -> String {
    let time = format_time_12h(reminder.time());
    if reminder.date() == today {
        time
    } else {
        format!("{} {}", format_day_label(reminder.date()), time)
    }
}
