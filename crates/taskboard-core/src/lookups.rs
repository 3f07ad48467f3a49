//! Task lookup by id or id prefix.
//!
//! Generated ids are long, so interactive users refer to tasks by a unique
//! prefix. Exact ids always win over prefix matches.

use thiserror::Error;

use crate::model::{Task, TaskId};
use crate::TaskState;

/// Maximum number of candidates listed in an ambiguity error.
const MAX_LISTED_CANDIDATES: usize = 5;

/// Number of id characters shown when listing candidates.
const SHORT_ID_LEN: usize = 6;

/// Errors that can occur when resolving a task reference.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// No task id equals or starts with the given text.
    #[error("task '{identifier}' not found")]
    NotFound {
        /// The id or prefix that was searched for.
        identifier: String,
    },

    /// Several task ids start with the given prefix.
    #[error("{}", format_ambiguous(identifier, candidates, *total))]
    Ambiguous {
        /// The prefix that was searched for.
        identifier: String,
        /// Up to five `(short id, task name)` pairs.
        candidates: Vec<(String, String)>,
        /// Total number of matching tasks.
        total: usize,
    },
}

fn format_ambiguous(identifier: &str, candidates: &[(String, String)], total: usize) -> String {
    let mut msg = format!(
        "Ambiguous task ID \"{}\"\n\nMultiple tasks match this prefix:",
        identifier
    );
    for (id, name) in candidates {
        msg.push_str(&format!("\n  {}  {}", id, name));
    }
    if total > candidates.len() {
        msg.push_str(&format!("\n  ... and {} more", total - candidates.len()));
    }
    msg.push_str("\n\nPlease use a longer prefix.");
    msg
}

/// Returns the first few characters of an id for display.
pub fn short_id(id: &TaskId) -> &str {
    let id = id.as_str();
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

impl TaskState {
    /// Finds a task by exact id.
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Resolves a task by exact id or unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::NotFound` if nothing matches, or
    /// `LookupError::Ambiguous` if the prefix matches several tasks.
    pub fn resolve_prefix(&self, id_or_prefix: &str) -> Result<&Task, LookupError> {
        if let Some(task) = self.tasks.iter().find(|t| t.id.as_str() == id_or_prefix) {
            return Ok(task);
        }

        let matches: Vec<&Task> = if id_or_prefix.is_empty() {
            Vec::new()
        } else {
            self.tasks
                .iter()
                .filter(|t| t.id.as_str().starts_with(id_or_prefix))
                .collect()
        };

        match matches.as_slice() {
            [] => Err(LookupError::NotFound {
                identifier: id_or_prefix.to_string(),
            }),
            [task] => Ok(*task),
            _ => Err(LookupError::Ambiguous {
                identifier: id_or_prefix.to_string(),
                candidates: matches
                    .iter()
                    .take(MAX_LISTED_CANDIDATES)
                    .map(|t| (short_id(&t.id).to_string(), t.task_name.clone()))
                    .collect(),
                total: matches.len(),
            }),
        }
    }
}
