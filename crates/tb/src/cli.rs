//! CLI argument parsing using clap derive macros.
//!
//! [`Cli`] covers the process arguments. [`ShellLine`] parses one line typed
//! into the interactive dashboard, so shell commands get the same flag
//! handling, help and error messages as the binary itself.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use taskboard_core::filter::{Choice, DueDateFilter, StatusFilter};
use taskboard_core::Priority;

/// tb - An in-memory task dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "tb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Start with an empty board instead of the demo tasks
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive dashboard (default)
    Shell,

    /// View configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// One line of dashboard input.
#[derive(Parser, Debug)]
#[command(name = "tb>", no_binary_name = true)]
#[command(disable_help_subcommand = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands accepted by the interactive dashboard
#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Add a new task
    #[command(alias = "a")]
    Add {
        /// Task name
        name: String,

        /// Task category
        #[arg(short, long)]
        category: String,

        /// Person the task is assigned to
        #[arg(short = 'u', long)]
        assignee: String,

        /// Priority (low, medium, high)
        #[arg(short = 'P', long)]
        priority: Option<Priority>,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<NaiveDate>,

        /// Assignment date (YYYY-MM-DD, default: today)
        #[arg(long)]
        assigned_on: Option<NaiveDate>,
    },

    /// Edit a task
    #[command(alias = "e")]
    Edit {
        /// Task ID or unique prefix
        task_id: String,

        /// New task name
        #[arg(short, long)]
        name: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New assignee
        #[arg(short = 'u', long)]
        assignee: Option<String>,

        /// New priority
        #[arg(short = 'P', long)]
        priority: Option<Priority>,

        /// New due date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "no_due")]
        due: Option<NaiveDate>,

        /// Remove the due date
        #[arg(long)]
        no_due: bool,

        /// New assignment date (YYYY-MM-DD)
        #[arg(long)]
        assigned_on: Option<NaiveDate>,
    },

    /// Flip a task between completed and incomplete
    #[command(alias = "done")]
    Toggle {
        /// Task ID or unique prefix
        task_id: String,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task ID or unique prefix
        task_id: String,
    },

    /// Change the active filters (unspecified fields keep their value)
    #[command(alias = "f")]
    Filter {
        /// Completion status (all, completed, incomplete)
        #[arg(short, long)]
        status: Option<StatusFilter>,

        /// Priority (all, low, medium, high)
        #[arg(short = 'P', long)]
        priority: Option<Choice<Priority>>,

        /// Category (all or an exact category)
        #[arg(short, long)]
        category: Option<Choice<String>>,

        /// Due date bucket (all, overdue, today, upcoming, no-due-date)
        #[arg(short, long)]
        due: Option<DueDateFilter>,

        /// Assignee (all or an exact name)
        #[arg(short = 'u', long)]
        assignee: Option<Choice<String>>,
    },

    /// Reset every filter to "all"
    Clear,

    /// List the tasks passing the active filters
    #[command(alias = "ls")]
    List,

    /// Show task details
    #[command(alias = "s")]
    Show {
        /// Task ID or unique prefix
        task_id: String,
    },

    /// Show the available filter values and the active selection
    Options,

    /// Show available commands
    Help,

    /// Leave the dashboard
    #[command(alias = "quit")]
    Exit,
}
