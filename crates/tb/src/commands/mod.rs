//! Command implementations for the tb CLI.
//!
//! Each handler takes the [`Board`] it works on plus a [`CommandContext`] and
//! returns the text to print. Handlers never write to the terminal
//! themselves, which keeps them testable against in-memory boards.

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod edit;
pub mod filters;
pub mod list;
pub mod show;
pub mod toggle;

use chrono::NaiveDate;
use taskboard_core::filter::FilterError;
use taskboard_core::{Clock, DraftError, IdGenerator, LookupError, Priority, TaskId, TaskStore};

use crate::cli::Cli;
use crate::output::helpers::DateFormat;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter value parsing error.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Task form validation error.
    #[error("invalid task: {0}")]
    Draft(#[from] DraftError),

    /// Task id resolution error.
    #[error("{0}")]
    Lookup(#[from] LookupError),

    /// Malformed dashboard input.
    #[error("{0}")]
    Usage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Returns true if an interactive session can report this error and
    /// keep reading input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CommandError::Io(_))
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing output settings.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// How due and assignment dates are printed.
    pub date_format: DateFormat,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// Command-line flags win over config values.
    pub fn from_cli(cli: &Cli, config: &Config) -> Result<Self> {
        Ok(Self {
            json_output: cli.json,
            use_colors: !cli.no_color && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            date_format: config.date_format()?,
        })
    }

    /// Returns `text` unless quiet mode suppresses confirmations.
    pub fn confirm(&self, text: String) -> String {
        if self.quiet {
            String::new()
        } else {
            text
        }
    }
}

/// The store together with the providers commands need.
///
/// A board can only be built from an existing [`TaskStore`], so every
/// command runs against a store that is known to exist.
pub struct Board {
    store: TaskStore,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    default_priority: Priority,
}

impl Board {
    /// Creates a board over `store` using the given clock and id source.
    pub fn new(store: TaskStore, clock: Box<dyn Clock>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store,
            clock,
            ids,
            default_priority: Priority::default(),
        }
    }

    /// Sets the priority given to tasks added without `--priority`.
    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    /// Returns the store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns the store for dispatching actions.
    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    /// Returns the clock's current day.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Draws a fresh task id.
    pub fn next_id(&mut self) -> TaskId {
        self.ids.next_id()
    }

    /// Returns the priority for tasks added without one.
    pub fn default_priority(&self) -> Priority {
        self.default_priority
    }
}
