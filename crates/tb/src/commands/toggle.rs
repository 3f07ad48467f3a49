//! Toggle command implementation.
//!
//! Flips a task between completed and incomplete.

use tracing::info;

use super::{Board, CommandContext, Result};
use crate::output::{format_task_change, format_task_change_json};

/// Executes the toggle command.
///
/// # Errors
///
/// Returns an error if the task cannot be resolved.
pub fn execute(board: &mut Board, ctx: &CommandContext, task_id: &str) -> Result<String> {
    let today = board.today();
    let toggled = board.store().state().resolve_prefix(task_id)?.toggled();

    info!(id = %toggled.id, completed = toggled.completed, "toggled task");
    board.store_mut().toggle_task(&toggled.id);

    if ctx.json_output {
        return Ok(format_task_change_json("toggled", &toggled, today)?);
    }
    let verb = if toggled.completed {
        "Completed"
    } else {
        "Reopened"
    };
    Ok(ctx.confirm(format_task_change(verb, &toggled, today, ctx)))
}
