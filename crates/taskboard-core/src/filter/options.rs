//! Choices offered by the dashboard's filter controls.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::Task;

/// The distinct categories and assignees present in a task list.
///
/// Both lists are de-duplicated and sorted so they can be shown as
/// selectable options next to the fixed "all" entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct category labels, sorted.
    pub categories: Vec<String>,
    /// Distinct assignee names, sorted.
    pub assignees: Vec<String>,
}

impl FilterOptions {
    /// Collects the options from a task list.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let categories: BTreeSet<&str> = tasks.iter().map(|t| t.category.as_str()).collect();
        let assignees: BTreeSet<&str> = tasks.iter().map(|t| t.assigned_user.as_str()).collect();

        Self {
            categories: categories.into_iter().map(str::to_string).collect(),
            assignees: assignees.into_iter().map(str::to_string).collect(),
        }
    }

    /// Returns true if some task has exactly this category.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Returns true if some task is assigned to exactly this user.
    pub fn has_assignee(&self, assignee: &str) -> bool {
        self.assignees.iter().any(|a| a == assignee)
    }
}
