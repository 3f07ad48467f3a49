//! Show command implementation.

use super::{Board, CommandContext, Result};
use crate::output::{format_task_details_json, format_task_details_table};

/// Executes the show command.
///
/// # Errors
///
/// Returns an error if the task cannot be resolved.
pub fn execute(board: &Board, ctx: &CommandContext, task_id: &str) -> Result<String> {
    let today = board.today();
    let task = board.store().state().resolve_prefix(task_id)?;

    if ctx.json_output {
        return Ok(format_task_details_json(task, today)?);
    }
    Ok(format_task_details_table(task, today, ctx))
}
