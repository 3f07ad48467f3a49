//! Filter selection output formatting.

use serde::Serialize;
use taskboard_core::filter::{DueDateFilter, FilterOptions, FilterSelection, StatusFilter};
use taskboard_core::Priority;

use super::helpers::format_header;
use crate::commands::CommandContext;

/// JSON output structure for the options command.
#[derive(Serialize)]
pub struct OptionsOutput<'a> {
    pub statuses: [StatusFilter; 3],
    pub priorities: [Priority; 3],
    pub categories: &'a [String],
    pub due_dates: [DueDateFilter; 5],
    pub assignees: &'a [String],
    pub active: &'a FilterSelection,
}

/// JSON output structure for a filter change.
#[derive(Serialize)]
pub struct FiltersChangedOutput<'a> {
    pub status: &'a str,
    pub filters: &'a FilterSelection,
    pub shown: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

const STATUSES: [StatusFilter; 3] = [
    StatusFilter::All,
    StatusFilter::Completed,
    StatusFilter::Incomplete,
];

const DUE_DATES: [DueDateFilter; 5] = [
    DueDateFilter::All,
    DueDateFilter::Overdue,
    DueDateFilter::Today,
    DueDateFilter::Upcoming,
    DueDateFilter::NoDueDate,
];

/// Formats the active selection on one line, e.g.
/// `status=incomplete priority=all category=Backend due=all assignee=all`.
pub fn format_selection(filters: &FilterSelection) -> String {
    format!(
        "status={} priority={} category={} due={} assignee={}",
        filters.status, filters.priority, filters.category, filters.due_date, filters.assigned_user
    )
}

/// Formats the available filter values as JSON.
pub fn format_options_json(
    options: &FilterOptions,
    active: &FilterSelection,
) -> Result<String, serde_json::Error> {
    let output = OptionsOutput {
        statuses: STATUSES,
        priorities: Priority::ALL,
        categories: &options.categories,
        due_dates: DUE_DATES,
        assignees: &options.assignees,
        active,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats the available filter values as a human-readable list.
pub fn format_options_table(
    options: &FilterOptions,
    active: &FilterSelection,
    ctx: &CommandContext,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", format_header("Filters", ctx.use_colors)));
    output.push_str(&format!(
        "  status:   {}\n",
        join(STATUSES.iter().map(|s| s.as_str().to_string()))
    ));
    output.push_str(&format!(
        "  priority: all, {}\n",
        join(Priority::ALL.iter().map(|p| p.as_str().to_string()))
    ));
    output.push_str(&format!(
        "  category: all{}\n",
        prefixed(&options.categories)
    ));
    output.push_str(&format!(
        "  due:      {}\n",
        join(DUE_DATES.iter().map(|d| d.as_str().to_string()))
    ));
    output.push_str(&format!(
        "  assignee: all{}\n",
        prefixed(&options.assignees)
    ));
    output.push_str(&format!("\nActive: {}\n", format_selection(active)));

    output
}

/// Formats the result of a filter change as JSON.
pub fn format_filters_changed_json(
    status: &str,
    filters: &FilterSelection,
    shown: usize,
    warnings: Vec<String>,
) -> Result<String, serde_json::Error> {
    let output = FiltersChangedOutput {
        status,
        filters,
        shown,
        warnings,
    };

    serde_json::to_string_pretty(&output)
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

fn prefixed(values: &[String]) -> String {
    values.iter().map(|v| format!(", {v}")).collect()
}
