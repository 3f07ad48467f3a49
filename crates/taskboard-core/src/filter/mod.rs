//! Multi-criteria task filtering.
//!
//! A [`FilterSelection`] holds one choice per field, and the
//! [`FilterEvaluator`] keeps the tasks that pass all of them.
//!
//! # Fields
//!
//! ## Status
//! - `all`, `completed`, `incomplete`
//!
//! ## Priority
//! - `all`, `Low`, `Medium`, `High`
//!
//! ## Category and assignee
//! - `all` or an exact, case-sensitive string
//!
//! ## Due date
//! - `overdue` - Due before today
//! - `today` - Due today
//! - `upcoming` - Due after today
//! - `no-due-date` - No due date set
//! - `all` - Any of the above
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use taskboard_core::filter::{visible, DueDateFilter, FilterPatch, FilterSelection};
//! use taskboard_core::Task;
//!
//! let filters = FilterSelection::new().merged(&FilterPatch::new().due_date(DueDateFilter::Overdue));
//! let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
//!
//! let tasks: Vec<Task> = Vec::new();
//! let shown = visible(&tasks, &filters, today);
//! assert!(shown.is_empty());
//! ```

mod error;
mod evaluator;
mod options;
mod selection;

pub use error::{FilterError, FilterResult};
pub use evaluator::{due_bucket, visible, FilterEvaluator};
pub use options::FilterOptions;
pub use selection::{
    Choice, ChoiceValue, DueDateFilter, FilterPatch, FilterSelection, StatusFilter, ALL,
};

#[cfg(test)]
mod tests;
