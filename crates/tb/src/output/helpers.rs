//! Common helper functions for output formatting.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;
use taskboard_core::Priority;

/// How dates are rendered in tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// "Today", "Tomorrow", "3 days ago", "Jun 10".
    #[default]
    Relative,
    /// "2025-06-10".
    Iso,
}

impl DateFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::Relative => "relative",
            DateFormat::Iso => "iso",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relative" => Ok(DateFormat::Relative),
            "iso" => Ok(DateFormat::Iso),
            other => Err(format!(
                "unknown date_format '{other}' (expected relative or iso)"
            )),
        }
    }
}

/// Truncates a string to at most `max_len` characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats priority for display.
pub fn format_priority(priority: Priority, use_colors: bool) -> String {
    let label = priority.as_str();

    if use_colors {
        match priority {
            Priority::High => label.red().to_string(),
            Priority::Medium => label.yellow().to_string(),
            Priority::Low => label.dimmed().to_string(),
        }
    } else {
        label.to_string()
    }
}

/// Formats a completion checkbox.
pub fn format_status(completed: bool, use_colors: bool) -> String {
    if completed {
        if use_colors {
            "[x]".green().to_string()
        } else {
            "[x]".to_string()
        }
    } else {
        "[ ]".to_string()
    }
}

/// Formats a date without styling.
pub fn format_date(date: NaiveDate, today: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::Iso => date.format("%Y-%m-%d").to_string(),
        DateFormat::Relative => {
            if date == today {
                "Today".to_string()
            } else if date == today + Duration::days(1) {
                "Tomorrow".to_string()
            } else if date == today - Duration::days(1) {
                "Yesterday".to_string()
            } else if date < today {
                format!("{} days ago", (today - date).num_days())
            } else {
                date.format("%b %d").to_string()
            }
        }
    }
}

/// Formats a due date for display: red when overdue, yellow when due today.
///
/// Completed tasks are never highlighted.
pub fn format_due(
    due_date: Option<NaiveDate>,
    today: NaiveDate,
    format: DateFormat,
    completed: bool,
    use_colors: bool,
) -> String {
    let Some(date) = due_date else {
        return String::new();
    };

    let display = format_date(date, today, format);

    if use_colors && !completed {
        if date < today {
            display.red().to_string()
        } else if date == today {
            display.yellow().to_string()
        } else {
            display
        }
    } else {
        display
    }
}

/// Formats a due date for the details view.
pub fn format_due_verbose(due_date: NaiveDate, today: NaiveDate, use_colors: bool) -> String {
    let date_str = if due_date == today {
        "Today".to_string()
    } else if due_date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else if due_date < today {
        let days = (today - due_date).num_days();
        if days == 1 {
            "1 day overdue".to_string()
        } else {
            format!("{days} days overdue")
        }
    } else {
        due_date.format("%B %d, %Y").to_string()
    };

    let date_str = format!("{} ({})", date_str, due_date.format("%Y-%m-%d"));

    if use_colors {
        if due_date < today {
            date_str.red().to_string()
        } else if due_date == today {
            date_str.yellow().to_string()
        } else {
            date_str
        }
    } else {
        date_str
    }
}

/// Renders a section header.
pub fn format_header(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.green().bold().to_string()
    } else {
        text.to_string()
    }
}
