//! Add command implementation.
//!
//! Builds a task from a draft and inserts it at the top of the board.

use chrono::NaiveDate;
use taskboard_core::{Priority, TaskDraft};
use tracing::info;

use super::{Board, CommandContext, Result};
use crate::output::{format_task_change, format_task_change_json};

/// Options for the add command.
#[derive(Debug)]
pub struct AddOptions {
    /// Task name.
    pub name: String,
    /// Task category.
    pub category: String,
    /// Assignee name.
    pub assignee: String,
    /// Priority (default: the board's default priority).
    pub priority: Option<Priority>,
    /// Due date.
    pub due: Option<NaiveDate>,
    /// Assignment date (default: today).
    pub assigned_on: Option<NaiveDate>,
}

/// Executes the add command.
///
/// # Errors
///
/// Returns an error if the name, category or assignee is blank.
pub fn execute(board: &mut Board, ctx: &CommandContext, opts: &AddOptions) -> Result<String> {
    let today = board.today();

    let mut draft = TaskDraft::new(&*opts.name, &*opts.category, &*opts.assignee)
        .priority(opts.priority.unwrap_or(board.default_priority()))
        .due_date(opts.due);
    if let Some(assigned_on) = opts.assigned_on {
        draft = draft.assigned_on(assigned_on);
    }

    // Validate before drawing an id so rejected input doesn't consume one.
    let draft = draft.validated()?;
    let task = draft.into_new_task(board.next_id(), today)?;

    info!(id = %task.id, name = %task.task_name, "added task");
    board.store_mut().add_task(task.clone());

    if ctx.json_output {
        return Ok(format_task_change_json("added", &task, today)?);
    }
    Ok(ctx.confirm(format_task_change("Added", &task, today, ctx)))
}
