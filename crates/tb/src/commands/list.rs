//! List command implementation.
//!
//! Shows the tasks passing the active filters, in board order.

use tracing::debug;

use super::{Board, CommandContext, Result};
use crate::output::{format_tasks_json, format_tasks_table};

/// Executes the list command.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn execute(board: &Board, ctx: &CommandContext) -> Result<String> {
    let today = board.today();
    let store = board.store();
    let tasks = store.visible(today);
    let total = store.tasks().len();
    debug!(shown = tasks.len(), total, %today, "listing tasks");

    if ctx.json_output {
        return Ok(format_tasks_json(&tasks, total, store.filters(), today)?);
    }
    Ok(format_tasks_table(&tasks, total, today, ctx))
}
