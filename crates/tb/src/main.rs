use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;
mod session;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&cli, &e);
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, &config)?;
    dispatch::dispatch(cli, &ctx, &config)
}

/// Sends diagnostics to stderr so they never mix with command output.
///
/// `RUST_LOG` wins; otherwise `--verbose` shows debug events and the
/// default shows warnings only.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr);
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

fn report_error(cli: &Cli, e: &CommandError) {
    if cli.json {
        let error_json = serde_json::json!({
            "error": {
                "code": error_code(e),
                "message": e.to_string(),
            }
        });
        match serde_json::to_string_pretty(&error_json) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("Error: {e}"),
        }
    } else {
        eprintln!("Error: {e}");
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Draft(_) => "VALIDATION_ERROR",
        CommandError::Lookup(_) => "NOT_FOUND",
        CommandError::Usage(_) => "USAGE_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the process exit status for an error.
fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Config(_) => 5,
        CommandError::Io(_) => 3,
        CommandError::Filter(_)
        | CommandError::Draft(_)
        | CommandError::Lookup(_)
        | CommandError::Usage(_)
        | CommandError::Json(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::filter::FilterError;
    use taskboard_core::{DraftError, LookupError};

    #[test]
    fn test_error_codes() {
        assert_eq!(
            error_code(&CommandError::Filter(FilterError::invalid_status("x"))),
            "FILTER_ERROR"
        );
        assert_eq!(
            error_code(&CommandError::Draft(DraftError::EmptyField {
                field: "category"
            })),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            error_code(&CommandError::Lookup(LookupError::NotFound {
                identifier: "1".to_string()
            })),
            "NOT_FOUND"
        );
        assert_eq!(
            error_code(&CommandError::Config("bad".to_string())),
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_exit_statuses() {
        assert_eq!(exit_status(&CommandError::Config("bad".to_string())), 5);
        assert_eq!(
            exit_status(&CommandError::Io(std::io::Error::other("closed"))),
            3
        );
        assert_eq!(exit_status(&CommandError::Usage("bad flag".to_string())), 1);
    }

    #[test]
    fn test_only_io_errors_end_a_session() {
        assert!(!CommandError::Io(std::io::Error::other("closed")).is_recoverable());
        assert!(CommandError::Usage("bad flag".to_string()).is_recoverable());
        assert!(CommandError::Config("bad".to_string()).is_recoverable());
    }
}
