//! Output formatting utilities for the tb CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`tasks`] - Task output formatting (list, show, add, edit, toggle, delete)
//! - [`filters`] - Filter output formatting (options, filter, clear)
//! - [`helpers`] - Common formatting utilities (truncation, priority, dates)

mod filters;
pub mod helpers;
mod tasks;

// Tasks
pub use tasks::{
    format_task_change, format_task_change_json, format_task_details_json,
    format_task_details_table, format_tasks_json, format_tasks_table,
};

// Filters
pub use filters::{
    format_filters_changed_json, format_options_json, format_options_table, format_selection,
};
