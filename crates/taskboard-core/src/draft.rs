//! Raw task input from the create/edit form.
//!
//! The store accepts any task it is given. A [`TaskDraft`] is where the
//! form's rules live: `task_name`, `category` and `assigned_user` are trimmed
//! and must be non-empty before a task can be built.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{Priority, Task, TaskId};

/// Errors produced when a draft fails validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// A required text field is empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Unvalidated task fields, as typed into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub task_name: String,
    pub priority: Priority,
    pub category: String,
    pub due_date: Option<NaiveDate>,
    pub assigned_user: String,
    /// Assignment date; `None` means "today" for new tasks and "unchanged"
    /// for edits.
    pub assigned_on: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft with the three required text fields set.
    pub fn new(
        task_name: impl Into<String>,
        category: impl Into<String>,
        assigned_user: impl Into<String>,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            category: category.into(),
            assigned_user: assigned_user.into(),
            ..Self::default()
        }
    }

    /// Pre-fills a draft from an existing task for editing.
    pub fn from_task(task: &Task) -> Self {
        Self {
            task_name: task.task_name.clone(),
            priority: task.priority,
            category: task.category.clone(),
            due_date: task.due_date,
            assigned_user: task.assigned_user.clone(),
            assigned_on: Some(task.assigned_on),
        }
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets or clears the due date.
    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the assignment date.
    pub fn assigned_on(mut self, assigned_on: NaiveDate) -> Self {
        self.assigned_on = Some(assigned_on);
        self
    }

    /// Returns a copy with text fields trimmed, or the first empty field.
    pub fn validated(&self) -> Result<Self, DraftError> {
        Ok(Self {
            task_name: required("task_name", &self.task_name)?,
            priority: self.priority,
            category: required("category", &self.category)?,
            due_date: self.due_date,
            assigned_user: required("assigned_user", &self.assigned_user)?,
            assigned_on: self.assigned_on,
        })
    }

    /// Returns true if the draft would pass validation.
    pub fn is_valid(&self) -> bool {
        self.validated().is_ok()
    }

    /// Builds a new, incomplete task.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::EmptyField` if a required field is blank.
    pub fn into_new_task(self, id: TaskId, today: NaiveDate) -> Result<Task, DraftError> {
        let draft = self.validated()?;
        Ok(Task {
            id,
            task_name: draft.task_name,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            assigned_user: draft.assigned_user,
            assigned_on: draft.assigned_on.unwrap_or(today),
            completed: false,
        })
    }

    /// Builds the replacement for `existing`, keeping its id and completion.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::EmptyField` if a required field is blank.
    pub fn apply_to(self, existing: &Task) -> Result<Task, DraftError> {
        let draft = self.validated()?;
        Ok(Task {
            id: existing.id.clone(),
            task_name: draft.task_name,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            assigned_user: draft.assigned_user,
            assigned_on: draft.assigned_on.unwrap_or(existing.assigned_on),
            completed: existing.completed,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::EmptyField { field })
    } else {
        Ok(trimmed.to_string())
    }
}
