//! The task store: single owner of the dashboard state.
//!
//! [`TaskStore`] holds the current [`TaskState`] snapshot and replaces it
//! wholesale on every dispatched [`TaskAction`]. Snapshots handed out by
//! [`TaskStore::snapshot`] are immutable and stay valid after later actions.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::filter::{visible, FilterPatch, FilterSelection};
use crate::model::{Task, TaskId};
use crate::providers::Clock;
use crate::reducer::{reduce, TaskAction};
use crate::TaskState;

/// Owner of the task list and the active filter selection.
///
/// All mutations go through [`dispatch`](Self::dispatch) or the convenience
/// methods wrapping it. None of them can fail: actions naming an unknown task
/// id are ignored.
///
/// # Snapshots
///
/// When an action changes nothing (for example deleting an id that is not
/// present) the store keeps the previous snapshot, so
/// `Arc::ptr_eq(&before, &store.snapshot())` holds.
///
/// # Thread Safety
///
/// `TaskStore` is [`Send`] and [`Sync`], but mutation needs `&mut self`.
/// The dashboard drives it from a single thread; readers that need a stable
/// view across calls should hold on to a snapshot.
///
/// # Example
///
/// ```
/// use taskboard_core::filter::{DueDateFilter, FilterPatch};
/// use taskboard_core::{Clock, FixedClock, SequentialIds, IdGenerator, TaskDraft, TaskStore};
/// use chrono::NaiveDate;
///
/// let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
/// let mut ids = SequentialIds::new();
/// let mut store = TaskStore::new();
///
/// let task = TaskDraft::new("Write docs", "Docs", "Alice")
///     .into_new_task(ids.next_id(), clock.today())
///     .unwrap();
/// store.add_task(task);
/// store.set_filters(FilterPatch::new().due_date(DueDateFilter::NoDueDate));
///
/// assert_eq!(store.visible_now(&clock).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    state: Arc<TaskState>,
}

impl TaskStore {
    /// Creates an empty store with default filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `tasks`, in the given order.
    ///
    /// The caller guarantees the ids are unique.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(TaskState::with_tasks(tasks)),
        }
    }

    /// Returns a shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<TaskState> {
        Arc::clone(&self.state)
    }

    /// Returns the current state.
    pub fn state(&self) -> &TaskState {
        &self.state
    }

    /// Returns the current task list, most recently added first.
    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// Returns the current filter selection.
    pub fn filters(&self) -> &FilterSelection {
        &self.state.filters
    }

    /// Applies an action and swaps in the resulting snapshot.
    ///
    /// Returns true if the state changed.
    pub fn dispatch(&mut self, action: TaskAction) -> bool {
        let kind = action.kind();
        let next = reduce(&self.state, action);
        let changed = next != *self.state;
        if changed {
            self.state = Arc::new(next);
        }
        debug!(
            action = kind,
            changed,
            tasks = self.state.tasks.len(),
            "dispatched task action"
        );
        changed
    }

    /// Inserts a task at the front of the list.
    ///
    /// The task's id must not already be in the store.
    pub fn add_task(&mut self, task: Task) -> bool {
        self.dispatch(TaskAction::Add(task))
    }

    /// Replaces the task with the same id. Unknown ids are ignored.
    pub fn update_task(&mut self, task: Task) -> bool {
        self.dispatch(TaskAction::Update(task))
    }

    /// Removes the task with this id. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        self.dispatch(TaskAction::Delete(id.clone()))
    }

    /// Flips completion of the task with this id. Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        self.dispatch(TaskAction::Toggle(id.clone()))
    }

    /// Merges `patch` into the filter selection.
    pub fn set_filters(&mut self, patch: FilterPatch) -> bool {
        self.dispatch(TaskAction::SetFilters(patch))
    }

    /// Resets every filter field to "all".
    pub fn clear_filters(&mut self) -> bool {
        self.dispatch(TaskAction::ClearFilters)
    }

    /// Returns the tasks passing the current filters on `today`.
    pub fn visible(&self, today: NaiveDate) -> Vec<Task> {
        visible(&self.state.tasks, &self.state.filters, today)
    }

    /// Returns the tasks passing the current filters on the clock's day.
    pub fn visible_now(&self, clock: &dyn Clock) -> Vec<Task> {
        self.visible(clock.today())
    }
}
