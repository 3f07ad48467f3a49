//! Tests for filter selection parsing and merging.

use super::*;
use crate::model::Priority;

// ==================== Parsing Tests ====================

#[test]
fn test_parse_status() {
    assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    assert_eq!(
        "completed".parse::<StatusFilter>().unwrap(),
        StatusFilter::Completed
    );
    assert_eq!(
        "Incomplete".parse::<StatusFilter>().unwrap(),
        StatusFilter::Incomplete
    );
}

#[test]
fn test_parse_status_invalid() {
    let err = "finished".parse::<StatusFilter>().unwrap_err();
    assert_eq!(err, FilterError::invalid_status("finished"));
    assert!(err.to_string().contains("finished"));
}

#[test]
fn test_parse_due_date_buckets() {
    assert_eq!("all".parse::<DueDateFilter>().unwrap(), DueDateFilter::All);
    assert_eq!(
        "overdue".parse::<DueDateFilter>().unwrap(),
        DueDateFilter::Overdue
    );
    assert_eq!("TODAY".parse::<DueDateFilter>().unwrap(), DueDateFilter::Today);
    assert_eq!(
        "upcoming".parse::<DueDateFilter>().unwrap(),
        DueDateFilter::Upcoming
    );
    assert_eq!(
        "no-due-date".parse::<DueDateFilter>().unwrap(),
        DueDateFilter::NoDueDate
    );
}

#[test]
fn test_parse_due_date_invalid() {
    assert!(matches!(
        "tomorrow".parse::<DueDateFilter>(),
        Err(FilterError::InvalidDueDate { .. })
    ));
}

#[test]
fn test_parse_priority_choice() {
    assert_eq!("all".parse::<Choice<Priority>>().unwrap(), Choice::All);
    assert_eq!(
        "high".parse::<Choice<Priority>>().unwrap(),
        Choice::Only(Priority::High)
    );
    assert!("p1".parse::<Choice<Priority>>().is_err());
}

#[test]
fn test_priority_choice_all_ignores_case() {
    assert_eq!("ALL".parse::<Choice<Priority>>().unwrap(), Choice::All);
    assert_eq!("All".parse::<Choice<Priority>>().unwrap(), Choice::All);
    assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    assert_eq!("ALL".parse::<DueDateFilter>().unwrap(), DueDateFilter::All);
}

#[test]
fn test_plain_priority_rejects_all() {
    let err = "all".parse::<Priority>().unwrap_err();
    assert_eq!(err, FilterError::invalid_priority("all"));
    assert_eq!(
        err.to_string(),
        "invalid priority: all (expected low, medium or high)"
    );
}

#[test]
fn test_parse_string_choice_is_exact() {
    assert_eq!("all".parse::<Choice<String>>().unwrap(), Choice::All);
    assert_eq!(
        "Backend".parse::<Choice<String>>().unwrap(),
        Choice::Only("Backend".to_string())
    );
    assert_eq!(
        "All".parse::<Choice<String>>().unwrap(),
        Choice::Only("All".to_string())
    );
}

#[test]
fn test_display_uses_wire_names() {
    assert_eq!(StatusFilter::Incomplete.to_string(), "incomplete");
    assert_eq!(DueDateFilter::NoDueDate.to_string(), "no-due-date");
    assert_eq!(Choice::<Priority>::All.to_string(), "all");
    assert_eq!(Choice::Only(Priority::Low).to_string(), "Low");
}

// ==================== Selection Tests ====================

#[test]
fn test_default_selection_is_all() {
    let filters = FilterSelection::new();

    assert_eq!(filters.status, StatusFilter::All);
    assert!(filters.priority.is_all());
    assert!(filters.category.is_all());
    assert_eq!(filters.due_date, DueDateFilter::All);
    assert!(filters.assigned_user.is_all());
    assert!(filters.is_default());
}

#[test]
fn test_merge_keeps_unspecified_fields() {
    let first = FilterSelection::new().merged(&FilterPatch::new().priority(Priority::High));
    let second = first.merged(&FilterPatch::new().category("Backend"));

    assert_eq!(second.priority, Choice::Only(Priority::High));
    assert_eq!(second.category, Choice::Only("Backend".to_string()));
    assert_eq!(second.status, StatusFilter::All);
    assert_eq!(second.due_date, DueDateFilter::All);
    assert!(second.assigned_user.is_all());
}

#[test]
fn test_merge_can_reset_single_field() {
    let filters = FilterSelection::new().merged(
        &FilterPatch::new()
            .category("Backend")
            .assigned_user("Bob"),
    );
    let mut patch = FilterPatch::new();
    patch.category = Some(Choice::All);

    let merged = filters.merged(&patch);

    assert!(merged.category.is_all());
    assert_eq!(merged.assigned_user, Choice::Only("Bob".to_string()));
}

#[test]
fn test_empty_patch_is_identity() {
    let filters = FilterSelection::new().merged(
        &FilterPatch::new()
            .status(StatusFilter::Completed)
            .due_date(DueDateFilter::Today),
    );

    assert!(FilterPatch::new().is_empty());
    assert_eq!(filters.merged(&FilterPatch::new()), filters);
}

#[test]
fn test_selection_serde_roundtrip() {
    let filters = FilterSelection::new().merged(
        &FilterPatch::new()
            .status(StatusFilter::Incomplete)
            .priority(Priority::Medium)
            .category("Frontend")
            .due_date(DueDateFilter::NoDueDate),
    );

    let json = serde_json::to_value(&filters).unwrap();
    assert_eq!(json["status"], "incomplete");
    assert_eq!(json["priority"], "Medium");
    assert_eq!(json["category"], "Frontend");
    assert_eq!(json["due_date"], "no-due-date");
    assert_eq!(json["assigned_user"], "all");

    let parsed: FilterSelection = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, filters);
}

#[test]
fn test_selection_deserialize_minimal() {
    let filters: FilterSelection = serde_json::from_str(r#"{"priority": "High"}"#).unwrap();

    assert_eq!(filters.priority, Choice::Only(Priority::High));
    assert_eq!(filters.status, StatusFilter::All);
}
