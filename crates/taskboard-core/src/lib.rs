//! In-memory task store for the taskboard dashboard.
//!
//! This crate holds the dashboard's state: an ordered list of tasks plus a
//! composite filter selection. State changes are expressed as
//! [`TaskAction`]s applied by a pure [`reduce`] function, and the list of
//! visible tasks is derived on demand by the [`filter`] module.
//!
//! Nothing is persisted. Ids and the current time come from the
//! [`IdGenerator`] and [`Clock`] providers supplied by the caller.

use serde::{Deserialize, Serialize};

pub mod draft;
pub mod filter;
mod lookups;
pub mod model;
pub mod providers;
mod reducer;
pub mod seed;
mod store;

pub use draft::{DraftError, TaskDraft};
pub use filter::{FilterPatch, FilterSelection};
pub use lookups::{short_id, LookupError};
pub use model::{Priority, Task, TaskId};
pub use providers::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidGenerator};
pub use reducer::{reduce, TaskAction};
pub use store::TaskStore;

/// A snapshot of the dashboard state.
///
/// Snapshots are produced by [`reduce`] and never edited afterwards; the
/// [`TaskStore`] replaces its snapshot as a whole on each action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    /// All tasks, most recently added first.
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// The active filter selection.
    #[serde(default)]
    pub filters: FilterSelection,
}

impl TaskState {
    /// Creates an empty state with default filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding `tasks` with default filters.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filters: FilterSelection::default(),
        }
    }

    /// Returns true if there are no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::filter::{Choice, DueDateFilter, StatusFilter};

    fn make_task(id: &str, completed: bool) -> Task {
        Task {
            id: TaskId::new(id),
            task_name: "Buy milk".to_string(),
            priority: Priority::Low,
            category: "Errands".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 25),
            assigned_user: "Dana".to_string(),
            assigned_on: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            completed,
        }
    }

    #[test]
    fn test_state_new_defaults() {
        let state = TaskState::new();

        assert!(state.tasks.is_empty());
        assert!(state.is_empty());
        assert!(state.filters.is_default());
    }

    #[test]
    fn test_completed_count() {
        let state = TaskState::with_tasks(vec![
            make_task("1", true),
            make_task("2", false),
            make_task("3", true),
        ]);

        assert_eq!(state.completed_count(), 2);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_state_serde_roundtrip_with_data() {
        let state = TaskState {
            tasks: vec![make_task("item-1", false)],
            filters: FilterSelection {
                status: StatusFilter::Incomplete,
                priority: Choice::Only(Priority::Low),
                category: Choice::All,
                due_date: DueDateFilter::Overdue,
                assigned_user: Choice::Only("Dana".to_string()),
            },
        };

        let json = serde_json::to_string_pretty(&state).unwrap();
        let deserialized: TaskState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_state_deserialize_minimal() {
        let state: TaskState = serde_json::from_str("{}").unwrap();

        assert!(state.tasks.is_empty());
        assert!(state.filters.is_default());
    }
}
