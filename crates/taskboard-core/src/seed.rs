//! Demo tasks for a non-empty first start.

use chrono::Duration;

use crate::model::{Priority, Task};
use crate::providers::{Clock, IdGenerator};

/// Builds three demo tasks dated relative to the clock's current day.
///
/// One is due in two days, one was due yesterday, and one has no due date
/// and is already completed, so every due date bucket has something to show.
pub fn demo_tasks(clock: &dyn Clock, ids: &mut dyn IdGenerator) -> Vec<Task> {
    let today = clock.today();

    vec![
        Task {
            id: ids.next_id(),
            task_name: "Design login screen".to_string(),
            priority: Priority::High,
            category: "Frontend".to_string(),
            due_date: Some(today + Duration::days(2)),
            assigned_user: "Alice".to_string(),
            assigned_on: today,
            completed: false,
        },
        Task {
            id: ids.next_id(),
            task_name: "API auth endpoints".to_string(),
            priority: Priority::Medium,
            category: "Backend".to_string(),
            due_date: Some(today - Duration::days(1)),
            assigned_user: "Bob".to_string(),
            assigned_on: today - Duration::days(3),
            completed: false,
        },
        Task {
            id: ids.next_id(),
            task_name: "Sprint planning".to_string(),
            priority: Priority::Low,
            category: "Meeting".to_string(),
            due_date: None,
            assigned_user: "Carol".to_string(),
            assigned_on: today,
            completed: true,
        },
    ]
}
