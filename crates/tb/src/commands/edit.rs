//! Edit command implementation.
//!
//! Pre-fills a draft from the existing task, applies the requested field
//! changes and replaces the task in place.

use chrono::NaiveDate;
use taskboard_core::{short_id, Priority, TaskDraft};
use tracing::info;

use super::{Board, CommandContext, Result};
use crate::output::{format_task_change, format_task_change_json};

/// Options for the edit command.
#[derive(Debug, Default)]
pub struct EditOptions {
    /// Task ID (full ID or prefix).
    pub task_id: String,
    /// New task name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New assignee.
    pub assignee: Option<String>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New due date.
    pub due: Option<NaiveDate>,
    /// Remove the due date.
    pub no_due: bool,
    /// New assignment date.
    pub assigned_on: Option<NaiveDate>,
}

/// Executes the edit command.
///
/// # Errors
///
/// Returns an error if the task cannot be resolved or an edited text field
/// is blank.
pub fn execute(board: &mut Board, ctx: &CommandContext, opts: &EditOptions) -> Result<String> {
    let today = board.today();
    let existing = board
        .store()
        .state()
        .resolve_prefix(&opts.task_id)?
        .clone();

    let mut draft = TaskDraft::from_task(&existing);
    if let Some(ref name) = opts.name {
        draft.task_name = name.clone();
    }
    if let Some(ref category) = opts.category {
        draft.category = category.clone();
    }
    if let Some(ref assignee) = opts.assignee {
        draft.assigned_user = assignee.clone();
    }
    if let Some(priority) = opts.priority {
        draft.priority = priority;
    }
    if opts.no_due {
        draft.due_date = None;
    } else if let Some(due) = opts.due {
        draft.due_date = Some(due);
    }
    if let Some(assigned_on) = opts.assigned_on {
        draft.assigned_on = Some(assigned_on);
    }

    let updated = draft.apply_to(&existing)?;

    if updated == existing {
        if ctx.json_output {
            let output = serde_json::json!({
                "status": "no_changes",
                "id": existing.id,
                "message": "No changes specified"
            });
            return Ok(serde_json::to_string_pretty(&output)?);
        }
        return Ok(ctx.confirm(format!(
            "No changes specified for task {}\n",
            short_id(&existing.id)
        )));
    }

    info!(id = %updated.id, "updated task");
    board.store_mut().update_task(updated.clone());

    if ctx.json_output {
        return Ok(format_task_change_json("updated", &updated, today)?);
    }
    Ok(ctx.confirm(format_task_change("Updated", &updated, today, ctx)))
}
