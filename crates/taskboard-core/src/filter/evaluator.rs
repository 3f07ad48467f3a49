//! Filter evaluation against tasks.
//!
//! This module provides the [`FilterEvaluator`] for testing tasks against a
//! [`FilterSelection`], and the [`visible`] function that derives the list of
//! tasks a dashboard should display.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use taskboard_core::filter::{FilterEvaluator, FilterPatch, FilterSelection, StatusFilter};
//! use taskboard_core::{Priority, Task, TaskId};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
//! let task = Task {
//!     id: TaskId::new("1"),
//!     task_name: "Ship release".to_string(),
//!     priority: Priority::High,
//!     category: "Backend".to_string(),
//!     due_date: Some(today),
//!     assigned_user: "Bob".to_string(),
//!     assigned_on: today,
//!     completed: false,
//! };
//!
//! let filters = FilterSelection::new().merged(&FilterPatch::new().status(StatusFilter::Incomplete));
//! let evaluator = FilterEvaluator::new(&filters, today);
//! assert!(evaluator.matches(&task));
//! ```

use chrono::NaiveDate;
use tracing::trace;

use super::selection::{DueDateFilter, FilterSelection, StatusFilter};
use crate::model::Task;

/// Evaluates a filter selection against tasks.
///
/// Due date buckets are computed relative to `today`, at day granularity.
/// A task matches when it passes every field of the selection.
#[derive(Debug, Clone)]
pub struct FilterEvaluator<'a> {
    filters: &'a FilterSelection,
    today: NaiveDate,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new filter evaluator.
    ///
    /// # Arguments
    ///
    /// * `filters` - The selection to evaluate
    /// * `today` - The current calendar day
    pub fn new(filters: &'a FilterSelection, today: NaiveDate) -> Self {
        Self { filters, today }
    }

    /// Returns true if the task matches every field of the selection.
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_status(task)
            && self.filters.priority.admits(&task.priority)
            && self.filters.category.admits(&task.category)
            && self.filters.assigned_user.admits(&task.assigned_user)
            && self.matches_due_date(task)
    }

    /// Filters a slice of tasks, returning only those that match, in order.
    pub fn filter_tasks<'b>(&self, tasks: &'b [Task]) -> Vec<&'b Task> {
        let matching: Vec<&Task> = tasks.iter().filter(|task| self.matches(task)).collect();
        trace!(
            total = tasks.len(),
            matching = matching.len(),
            "evaluated task filters"
        );
        matching
    }

    fn matches_status(&self, task: &Task) -> bool {
        match self.filters.status {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Incomplete => !task.completed,
        }
    }

    fn matches_due_date(&self, task: &Task) -> bool {
        match self.filters.due_date {
            DueDateFilter::All => true,
            bucket => due_bucket(task.due_date, self.today) == bucket,
        }
    }
}

/// Returns the due date bucket a date falls into relative to `today`.
///
/// The result is never [`DueDateFilter::All`]. Dated tasks land in exactly one
/// of `Overdue` (before today), `Today` or `Upcoming` (after today).
pub fn due_bucket(due_date: Option<NaiveDate>, today: NaiveDate) -> DueDateFilter {
    let Some(due_date) = due_date else {
        return DueDateFilter::NoDueDate;
    };

    if due_date < today {
        DueDateFilter::Overdue
    } else if due_date > today {
        DueDateFilter::Upcoming
    } else {
        DueDateFilter::Today
    }
}

/// Returns the tasks that pass `filters` on `today`, preserving order.
///
/// This is a pure function: calling it again with the same arguments returns
/// the same tasks in the same order.
pub fn visible(tasks: &[Task], filters: &FilterSelection, today: NaiveDate) -> Vec<Task> {
    FilterEvaluator::new(filters, today)
        .filter_tasks(tasks)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
