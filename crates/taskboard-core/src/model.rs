//! Task model for the taskboard dashboard.
//!
//! This module defines the [`Task`] record and its supporting types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::FilterError;

/// Opaque unique identifier of a task.
///
/// Ids are produced by an [`IdGenerator`](crate::IdGenerator) when a task is
/// created and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Task priority level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Returns the display name ("Low", "Medium" or "High").
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = FilterError;

    /// Parses a priority name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(FilterError::invalid_priority(s)),
        }
    }
}

/// A single trackable work item.
///
/// Tasks are values: every change made through the store replaces the whole
/// task rather than editing it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// The unique identifier for the task.
    pub id: TaskId,

    /// The task title, trimmed and non-empty.
    pub task_name: String,

    /// Task priority.
    #[serde(default)]
    pub priority: Priority,

    /// Category label such as "Frontend" or "Backend".
    pub category: String,

    /// Calendar due date, or `None` when the task has no due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Name of the assignee.
    pub assigned_user: String,

    /// Date the task was assigned.
    pub assigned_on: NaiveDate,

    /// Whether the task is completed.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Returns true if the task has a due date.
    pub fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }

    /// Returns a copy of this task with `completed` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
