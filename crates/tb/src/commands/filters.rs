//! Filter commands: change, reset and inspect the active filter selection.
//!
//! Category and assignee filters match exactly. Naming a value no task has
//! is allowed (it simply shows nothing), but the command warns and suggests
//! the closest existing value.

use strsim::levenshtein;
use taskboard_core::filter::{Choice, FilterOptions, FilterPatch};
use tracing::{debug, info};

use super::{Board, CommandContext, Result};
use crate::output::{
    format_filters_changed_json, format_options_json, format_options_table, format_selection,
};

/// Maximum Levenshtein distance to consider a value as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Finds the best matching value from a list of candidates using Levenshtein distance.
///
/// Returns the best match if its edit distance is within the threshold and
/// it differs from the query, otherwise returns `None`. The threshold shrinks
/// for short queries, so a name is never suggested for a query it shares
/// almost nothing with.
pub(crate) fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name, distance)
        })
        .min_by_key(|(_, d)| *d)?;

    let max_distance = MAX_SUGGESTION_DISTANCE.min(query.chars().count() / 2);
    if best_match != query && best_distance <= max_distance {
        Some(best_match.to_string())
    } else {
        None
    }
}

fn unknown_value_warning(
    field: &str,
    value: &Choice<String>,
    known: &[String],
) -> Option<String> {
    let value = value.as_only()?;
    if known.iter().any(|k| k == value) {
        return None;
    }

    let base = format!("No task has {field} '{value}'.");
    let message = match find_similar_name(value, known.iter().map(String::as_str)) {
        Some(suggestion) => format!("{base} Did you mean '{suggestion}'?"),
        None => base,
    };
    debug!(field, value = %value, "filter names an unknown value");
    Some(message)
}

/// Executes the filter command, merging `patch` into the active selection.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn execute_set(board: &mut Board, ctx: &CommandContext, patch: FilterPatch) -> Result<String> {
    let options = FilterOptions::from_tasks(board.store().tasks());
    let mut warnings = Vec::new();
    if let Some(ref category) = patch.category {
        warnings.extend(unknown_value_warning(
            "category",
            category,
            &options.categories,
        ));
    }
    if let Some(ref assignee) = patch.assigned_user {
        warnings.extend(unknown_value_warning(
            "assignee",
            assignee,
            &options.assignees,
        ));
    }

    board.store_mut().set_filters(patch);
    let filters = board.store().filters();
    let shown = board.store().visible(board.today()).len();
    info!(filters = %format_selection(filters), shown, "filters changed");

    if ctx.json_output {
        return Ok(format_filters_changed_json(
            "filtered", filters, shown, warnings,
        )?);
    }

    let mut output = String::new();
    for warning in &warnings {
        output.push_str(&format!("Warning: {warning}\n"));
    }
    output.push_str(&ctx.confirm(format!(
        "Filters: {} ({} shown)\n",
        format_selection(filters),
        shown
    )));
    Ok(output)
}

/// Executes the clear command, resetting every filter to "all".
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn execute_clear(board: &mut Board, ctx: &CommandContext) -> Result<String> {
    board.store_mut().clear_filters();
    let shown = board.store().tasks().len();
    info!("filters cleared");

    if ctx.json_output {
        return Ok(format_filters_changed_json(
            "cleared",
            board.store().filters(),
            shown,
            Vec::new(),
        )?);
    }
    Ok(ctx.confirm(format!("Filters cleared ({shown} shown)\n")))
}

/// Executes the options command.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn execute_options(board: &Board, ctx: &CommandContext) -> Result<String> {
    let options = FilterOptions::from_tasks(board.store().tasks());

    if ctx.json_output {
        return Ok(format_options_json(&options, board.store().filters())?);
    }
    Ok(format_options_table(&options, board.store().filters(), ctx))
}
