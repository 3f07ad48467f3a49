//! State transitions for the task store.
//!
//! Every change to a [`TaskState`] is described by a [`TaskAction`] and
//! applied by [`reduce`], which builds a new state and leaves its input
//! untouched.

use crate::filter::{FilterPatch, FilterSelection};
use crate::model::{Task, TaskId};
use crate::TaskState;

/// A mutation of the task state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Insert a task at the front of the list. The id must be fresh.
    Add(Task),
    /// Replace the task with the same id, keeping its position.
    Update(Task),
    /// Remove the task with this id.
    Delete(TaskId),
    /// Flip the completion flag of the task with this id.
    Toggle(TaskId),
    /// Merge the given fields into the filter selection.
    SetFilters(FilterPatch),
    /// Reset every filter field to "all".
    ClearFilters,
}

impl TaskAction {
    /// Returns a short name for the action, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskAction::Add(_) => "add",
            TaskAction::Update(_) => "update",
            TaskAction::Delete(_) => "delete",
            TaskAction::Toggle(_) => "toggle",
            TaskAction::SetFilters(_) => "set_filters",
            TaskAction::ClearFilters => "clear_filters",
        }
    }
}

/// Applies an action to a state, returning the next state.
///
/// Actions that reference an unknown task id leave the tasks unchanged;
/// they are not errors.
pub fn reduce(state: &TaskState, action: TaskAction) -> TaskState {
    match action {
        TaskAction::Add(task) => {
            let mut tasks = Vec::with_capacity(state.tasks.len() + 1);
            tasks.push(task);
            tasks.extend(state.tasks.iter().cloned());
            TaskState {
                tasks,
                filters: state.filters.clone(),
            }
        }
        TaskAction::Update(task) => TaskState {
            tasks: state
                .tasks
                .iter()
                .map(|t| if t.id == task.id { task.clone() } else { t.clone() })
                .collect(),
            filters: state.filters.clone(),
        },
        TaskAction::Delete(id) => TaskState {
            tasks: state.tasks.iter().filter(|t| t.id != id).cloned().collect(),
            filters: state.filters.clone(),
        },
        TaskAction::Toggle(id) => TaskState {
            tasks: state
                .tasks
                .iter()
                .map(|t| if t.id == id { t.toggled() } else { t.clone() })
                .collect(),
            filters: state.filters.clone(),
        },
        TaskAction::SetFilters(patch) => TaskState {
            tasks: state.tasks.clone(),
            filters: state.filters.merged(&patch),
        },
        TaskAction::ClearFilters => TaskState {
            tasks: state.tasks.clone(),
            filters: FilterSelection::default(),
        },
    }
}
