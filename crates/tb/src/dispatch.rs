//! Command dispatch module for routing CLI commands to their handlers.

use std::io::{self, IsTerminal};

use taskboard_core::seed::demo_tasks;
use taskboard_core::{SystemClock, TaskStore, UuidGenerator};
use tracing::debug;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::config::Config;
use crate::commands::{self, Board, CommandContext, CommandError, Result};
use crate::session::Session;

/// Runs the command selected on the command line.
pub fn dispatch(cli: &Cli, ctx: &CommandContext, config: &Config) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Shell) => run_shell(cli, ctx, config),
        Some(Commands::Config { command }) => dispatch_config(ctx, command),
        Some(Commands::Completions { shell }) => {
            commands::completions::execute(*shell).map_err(CommandError::Io)
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    let output = match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx)?,
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx)?,
    };
    print!("{output}");
    Ok(())
}

/// Builds the starting board: the demo tasks, or nothing with `--empty`
/// or `seed_demo = false`.
pub fn initial_board(seed_demo: bool, config: &Config) -> Result<Board> {
    let clock = SystemClock;
    let mut ids = UuidGenerator;

    let store = if seed_demo {
        TaskStore::with_tasks(demo_tasks(&clock, &mut ids))
    } else {
        TaskStore::new()
    };
    debug!(tasks = store.tasks().len(), "board ready");

    Ok(Board::new(store, Box::new(clock), Box::new(ids))
        .with_default_priority(config.default_priority()?))
}

fn run_shell(cli: &Cli, ctx: &CommandContext, config: &Config) -> Result<()> {
    let board = initial_board(!cli.empty && config.seed_demo(), config)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive && !ctx.quiet && !ctx.json_output {
        println!("tb - task dashboard. Type 'help' for commands, 'exit' to leave.");
    }

    let mut session =
        Session::new(board, ctx.clone(), io::stdout(), io::stderr()).with_prompt(interactive);
    session.run(stdin.lock())
}
