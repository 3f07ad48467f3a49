//! Task output formatting.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;
use taskboard_core::filter::{due_bucket, DueDateFilter, FilterSelection};
use taskboard_core::{short_id, Priority, Task};

use super::helpers::{
    format_date, format_due, format_due_verbose, format_priority, format_status, truncate_str,
};
use crate::commands::CommandContext;

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub tasks: Vec<TaskOutput<'a>>,
    pub shown: usize,
    pub total: usize,
    pub filters: &'a FilterSelection,
}

/// JSON output structure for a single task.
#[derive(Serialize)]
pub struct TaskOutput<'a> {
    pub id: &'a str,
    pub task_name: &'a str,
    pub priority: Priority,
    pub category: &'a str,
    pub due_date: Option<NaiveDate>,
    pub due_bucket: DueDateFilter,
    pub assigned_user: &'a str,
    pub assigned_on: NaiveDate,
    pub completed: bool,
}

impl<'a> TaskOutput<'a> {
    pub fn new(task: &'a Task, today: NaiveDate) -> Self {
        Self {
            id: task.id.as_str(),
            task_name: &task.task_name,
            priority: task.priority,
            category: &task.category,
            due_date: task.due_date,
            due_bucket: due_bucket(task.due_date, today),
            assigned_user: &task.assigned_user,
            assigned_on: task.assigned_on,
            completed: task.completed,
        }
    }
}

/// JSON output structure for a mutation (add, edit, toggle, delete).
#[derive(Serialize)]
pub struct TaskChangeOutput<'a> {
    pub status: &'a str,
    pub task: TaskOutput<'a>,
}

/// Formats the visible tasks as JSON.
pub fn format_tasks_json(
    tasks: &[Task],
    total: usize,
    filters: &FilterSelection,
    today: NaiveDate,
) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        tasks: tasks.iter().map(|t| TaskOutput::new(t, today)).collect(),
        shown: tasks.len(),
        total,
        filters,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a single task as JSON.
pub fn format_task_details_json(
    task: &Task,
    today: NaiveDate,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TaskOutput::new(task, today))
}

/// Formats the result of a mutation as JSON.
pub fn format_task_change_json(
    status: &str,
    task: &Task,
    today: NaiveDate,
) -> Result<String, serde_json::Error> {
    let output = TaskChangeOutput {
        status,
        task: TaskOutput::new(task, today),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats the visible tasks as a table.
pub fn format_tasks_table(
    tasks: &[Task],
    total: usize,
    today: NaiveDate,
    ctx: &CommandContext,
) -> String {
    if tasks.is_empty() {
        return if total == 0 {
            "No tasks yet. Use 'add' to create one.\n".to_string()
        } else {
            format!("No tasks match the current filters ({total} hidden).\n")
        };
    }

    let mut output = String::new();

    let header = format!(
        "{:<8} {:<3} {:<8} {:<12} {:<12} {:<10} {}",
        "ID", "", "Pri", "Due", "Category", "Assignee", "Task"
    );
    if ctx.use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for task in tasks {
        // Pad before styling so escape codes don't break the columns.
        let priority = format!("{:<8}", task.priority.as_str());
        let priority = if ctx.use_colors {
            format_priority_padded(task.priority, &priority)
        } else {
            priority
        };
        let due = format!(
            "{:<12}",
            task.due_date
                .map(|d| format_date(d, today, ctx.date_format))
                .unwrap_or_default()
        );
        let due = if ctx.use_colors {
            color_due_padded(&due, task, today)
        } else {
            due
        };
        let name = if ctx.use_colors && task.completed {
            task.task_name.strikethrough().to_string()
        } else {
            task.task_name.clone()
        };

        output.push_str(&format!(
            "{:<8} {} {} {} {:<12} {:<10} {}\n",
            short_id(&task.id),
            format_status(task.completed, ctx.use_colors),
            priority,
            due,
            truncate_str(&task.category, 12),
            truncate_str(&task.assigned_user, 10),
            name
        ));
    }

    if tasks.len() < total {
        output.push_str(&format!("\n{} of {} tasks shown\n", tasks.len(), total));
    }

    output
}

fn format_priority_padded(priority: Priority, padded: &str) -> String {
    match priority {
        Priority::High => padded.red().to_string(),
        Priority::Medium => padded.yellow().to_string(),
        Priority::Low => padded.dimmed().to_string(),
    }
}

fn color_due_padded(padded: &str, task: &Task, today: NaiveDate) -> String {
    match task.due_date {
        Some(date) if !task.completed && date < today => padded.red().to_string(),
        Some(date) if !task.completed && date == today => padded.yellow().to_string(),
        _ => padded.to_string(),
    }
}

/// Formats a single task as a human-readable block (show command).
pub fn format_task_details_table(task: &Task, today: NaiveDate, ctx: &CommandContext) -> String {
    let mut output = String::new();

    let label = if ctx.use_colors {
        "Task:".bold().to_string()
    } else {
        "Task:".to_string()
    };
    output.push_str(&format!("{} {}\n", label, task.task_name));
    output.push_str(&format!("ID: {}\n", task.id));
    output.push_str(&format!(
        "Status: {}\n",
        if task.completed { "completed" } else { "incomplete" }
    ));
    output.push_str(&format!(
        "Priority: {}\n",
        format_priority(task.priority, ctx.use_colors)
    ));
    output.push_str(&format!("Category: {}\n", task.category));

    match task.due_date {
        Some(due) => output.push_str(&format!(
            "Due: {}\n",
            format_due_verbose(due, today, ctx.use_colors && !task.completed)
        )),
        None => output.push_str("Due: no due date\n"),
    }

    output.push_str(&format!("Assigned to: {}\n", task.assigned_user));
    output.push_str(&format!(
        "Assigned on: {}\n",
        format_date(task.assigned_on, today, ctx.date_format)
    ));

    output
}

/// Formats a one-line confirmation for a mutation.
pub fn format_task_change(
    verb: &str,
    task: &Task,
    today: NaiveDate,
    ctx: &CommandContext,
) -> String {
    let due = format_due(
        task.due_date,
        today,
        ctx.date_format,
        task.completed,
        ctx.use_colors,
    );
    let mut line = format!("{}: {} ({})", verb, task.task_name, short_id(&task.id));
    if !due.is_empty() {
        line.push_str(&format!(" due {due}"));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use taskboard_core::TaskId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn make_task(id: &str, name: &str, due_in: Option<i64>, completed: bool) -> Task {
        Task {
            id: TaskId::new(id),
            task_name: name.to_string(),
            priority: Priority::High,
            category: "Backend".to_string(),
            due_date: due_in.map(|d| today() + Duration::days(d)),
            assigned_user: "Bob".to_string(),
            assigned_on: today(),
            completed,
        }
    }

    #[test]
    fn test_table_empty_board() {
        let out = format_tasks_table(&[], 0, today(), &CommandContext::default());
        assert!(out.contains("No tasks yet"));
    }

    #[test]
    fn test_table_everything_filtered() {
        let out = format_tasks_table(&[], 3, today(), &CommandContext::default());
        assert_eq!(out, "No tasks match the current filters (3 hidden).\n");
    }

    #[test]
    fn test_table_rows() {
        let tasks = vec![
            make_task("1234567890", "Fix login", Some(-1), false),
            make_task("2", "Ship it", None, true),
        ];
        let out = format_tasks_table(&tasks, 5, today(), &CommandContext::default());
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("123456 "));
        assert!(lines[1].contains("[ ]"));
        assert!(lines[1].contains("Yesterday"));
        assert!(lines[1].ends_with("Fix login"));
        assert!(lines[2].contains("[x]"));
        assert!(out.contains("2 of 5 tasks shown"));
    }

    #[test]
    fn test_json_list() {
        let tasks = vec![make_task("1", "Fix login", Some(0), false)];
        let json = format_tasks_json(&tasks, 2, &FilterSelection::default(), today()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["shown"], 1);
        assert_eq!(value["total"], 2);
        assert_eq!(value["tasks"][0]["due_bucket"], "today");
        assert_eq!(value["tasks"][0]["due_date"], "2025-06-02");
        assert_eq!(value["tasks"][0]["priority"], "High");
        assert_eq!(value["filters"]["status"], "all");
    }

    #[test]
    fn test_details_table() {
        let task = make_task("1", "Fix login", None, false);
        let out = format_task_details_table(&task, today(), &CommandContext::default());

        assert!(out.starts_with("Task: Fix login\n"));
        assert!(out.contains("Status: incomplete\n"));
        assert!(out.contains("Due: no due date\n"));
        assert!(out.contains("Assigned on: Today\n"));
    }

    #[test]
    fn test_change_line() {
        let task = make_task("abcdefgh", "Fix login", Some(1), false);
        let out = format_task_change("Added", &task, today(), &CommandContext::default());
        assert_eq!(out, "Added: Fix login (abcdef) due Tomorrow\n");
    }

    #[test]
    fn test_change_json() {
        let task = make_task("1", "Fix login", None, true);
        let json = format_task_change_json("toggled", &task, today()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "toggled");
        assert_eq!(value["task"]["completed"], true);
        assert_eq!(value["task"]["due_bucket"], "no-due-date");
        assert!(value["task"]["due_date"].is_null());
    }
}
