//! Filter selection types.
//!
//! A [`FilterSelection`] holds one active choice per filterable field. Each
//! field defaults to "all", which never excludes a task. Selections are
//! changed by merging a [`FilterPatch`] or by resetting to the default.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::error::FilterError;
use crate::model::Priority;

/// The keyword that selects every value of a field.
pub const ALL: &str = "all";

/// Completion status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl StatusFilter {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL,
            StatusFilter::Completed => "completed",
            StatusFilter::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" | "done" => Ok(StatusFilter::Completed),
            "incomplete" | "open" => Ok(StatusFilter::Incomplete),
            _ => Err(FilterError::invalid_status(s)),
        }
    }
}

/// Due date bucket filter.
///
/// `Overdue`, `Today` and `Upcoming` partition tasks that have a due date;
/// `NoDueDate` selects the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueDateFilter {
    #[default]
    All,
    Overdue,
    Today,
    Upcoming,
    NoDueDate,
}

impl DueDateFilter {
    /// Returns the wire name of the bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            DueDateFilter::All => ALL,
            DueDateFilter::Overdue => "overdue",
            DueDateFilter::Today => "today",
            DueDateFilter::Upcoming => "upcoming",
            DueDateFilter::NoDueDate => "no-due-date",
        }
    }
}

impl fmt::Display for DueDateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DueDateFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(DueDateFilter::All),
            "overdue" => Ok(DueDateFilter::Overdue),
            "today" => Ok(DueDateFilter::Today),
            "upcoming" => Ok(DueDateFilter::Upcoming),
            "no-due-date" | "none" => Ok(DueDateFilter::NoDueDate),
            _ => Err(FilterError::invalid_due_date(s)),
        }
    }
}

/// Either every value of a field or exactly one value.
///
/// Serialized as `"all"` or as the value's own text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Choice<T> {
    /// Returns true if this choice selects every value.
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    /// Returns the selected value, if any.
    pub fn as_only(&self) -> Option<&T> {
        match self {
            Choice::All => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Choice<T> {
    /// Returns true if `value` passes this choice (exact match or `All`).
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(selected) => selected == value,
        }
    }
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Choice::Only(value)
    }
}

impl From<&str> for Choice<String> {
    /// Selects exactly `value`; use [`Choice::All`] to select everything.
    fn from(value: &str) -> Self {
        Choice::Only(value.to_string())
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

/// A value that can be narrowed to by a [`Choice`].
pub trait ChoiceValue: FromStr {
    /// Whether `"all"` is recognized in any letter case.
    ///
    /// Free-text values match exactly, so only the lowercase spelling means
    /// "all" for them.
    const ALL_IGNORES_CASE: bool = false;
}

impl ChoiceValue for String {}

impl ChoiceValue for Priority {
    const ALL_IGNORES_CASE: bool = true;
}

impl<T: ChoiceValue> FromStr for Choice<T> {
    type Err = T::Err;

    /// Parses `"all"` as [`Choice::All`] and anything else as a value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let is_all = if T::ALL_IGNORES_CASE {
            s.trim().eq_ignore_ascii_case(ALL)
        } else {
            s == ALL
        };
        if is_all {
            Ok(Choice::All)
        } else {
            s.parse().map(Choice::Only)
        }
    }
}

impl<T: fmt::Display> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Choice<T>
where
    T: ChoiceValue,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// The active query over the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Completion status.
    #[serde(default)]
    pub status: StatusFilter,

    /// Exact priority.
    #[serde(default)]
    pub priority: Choice<Priority>,

    /// Exact category label.
    #[serde(default)]
    pub category: Choice<String>,

    /// Due date bucket relative to the current day.
    #[serde(default)]
    pub due_date: DueDateFilter,

    /// Exact assignee name.
    #[serde(default)]
    pub assigned_user: Choice<String>,
}

impl FilterSelection {
    /// Returns the selection with every field set to "all".
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field constrains the task list.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a new selection with the fields present in `patch` replaced.
    pub fn merged(&self, patch: &FilterPatch) -> Self {
        Self {
            status: patch.status.unwrap_or(self.status),
            priority: patch
                .priority
                .clone()
                .unwrap_or_else(|| self.priority.clone()),
            category: patch
                .category
                .clone()
                .unwrap_or_else(|| self.category.clone()),
            due_date: patch.due_date.unwrap_or(self.due_date),
            assigned_user: patch
                .assigned_user
                .clone()
                .unwrap_or_else(|| self.assigned_user.clone()),
        }
    }
}

/// A partial update of a [`FilterSelection`].
///
/// Fields left as `None` keep their current value when merged.
///
/// # Example
///
/// ```
/// use taskboard_core::filter::{Choice, FilterPatch, FilterSelection};
/// use taskboard_core::Priority;
///
/// let patch = FilterPatch::new()
///     .priority(Priority::High)
///     .category("Backend");
/// let filters = FilterSelection::new().merged(&patch);
///
/// assert_eq!(filters.priority, Choice::Only(Priority::High));
/// assert_eq!(filters.category, Choice::Only("Backend".to_string()));
/// assert!(filters.assigned_user.is_all());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Choice<Priority>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Choice<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDateFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user: Option<Choice<String>>,
}

impl FilterPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status field.
    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority field.
    pub fn priority(mut self, priority: impl Into<Choice<Priority>>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the category field.
    pub fn category(mut self, category: impl Into<Choice<String>>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the due date bucket.
    pub fn due_date(mut self, due_date: DueDateFilter) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee field.
    pub fn assigned_user(mut self, assigned_user: impl Into<Choice<String>>) -> Self {
        self.assigned_user = Some(assigned_user.into());
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
