//! Delete command implementation.

use tracing::info;

use super::{Board, CommandContext, Result};
use crate::output::{format_task_change, format_task_change_json};

/// Executes the delete command.
///
/// # Errors
///
/// Returns an error if the task cannot be resolved.
pub fn execute(board: &mut Board, ctx: &CommandContext, task_id: &str) -> Result<String> {
    let today = board.today();
    let task = board.store().state().resolve_prefix(task_id)?.clone();

    info!(id = %task.id, "deleted task");
    board.store_mut().delete_task(&task.id);

    if ctx.json_output {
        return Ok(format_task_change_json("deleted", &task, today)?);
    }
    Ok(ctx.confirm(format_task_change("Deleted", &task, today, ctx)))
}
