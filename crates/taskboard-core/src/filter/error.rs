//! Error types for parsing filter values.

use thiserror::Error;

/// A specialized Result type for filter parsing operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur when parsing a filter value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// An invalid priority value was specified.
    #[error("invalid priority: {value} (expected low, medium or high)")]
    InvalidPriority {
        /// The invalid priority value.
        value: String,
    },

    /// An invalid completion status was specified.
    #[error("invalid status: {value} (expected all, completed or incomplete)")]
    InvalidStatus {
        /// The invalid status value.
        value: String,
    },

    /// An invalid due date bucket was specified.
    #[error("invalid due date filter: {value} (expected all, overdue, today, upcoming or no-due-date)")]
    InvalidDueDate {
        /// The invalid bucket name.
        value: String,
    },
}

impl FilterError {
    /// Creates an invalid priority error.
    pub fn invalid_priority(value: impl Into<String>) -> Self {
        FilterError::InvalidPriority {
            value: value.into(),
        }
    }

    /// Creates an invalid status error.
    pub fn invalid_status(value: impl Into<String>) -> Self {
        FilterError::InvalidStatus {
            value: value.into(),
        }
    }

    /// Creates an invalid due date bucket error.
    pub fn invalid_due_date(value: impl Into<String>) -> Self {
        FilterError::InvalidDueDate {
            value: value.into(),
        }
    }
}
