//! The interactive dashboard loop.
//!
//! A [`Session`] reads one command per line, runs it against its [`Board`]
//! and writes the result. Errors in a single line are reported and the
//! session keeps going; only I/O failures end it early.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use taskboard_core::filter::FilterPatch;
use tracing::debug;

use crate::cli::{ShellCommand, ShellLine};
use crate::commands::add::AddOptions;
use crate::commands::edit::EditOptions;
use crate::commands::{self, Board, CommandContext, CommandError, Result};

const PROMPT: &str = "tb> ";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive dashboard over one board.
pub struct Session<O: Write, E: Write> {
    board: Board,
    ctx: CommandContext,
    out: O,
    err: E,
    prompt: bool,
}

impl<O: Write, E: Write> Session<O, E> {
    /// Creates a session writing results to `out` and errors to `err`.
    pub fn new(board: Board, ctx: CommandContext, out: O, err: E) -> Self {
        Self {
            board,
            ctx,
            out,
            err,
            prompt: false,
        }
    }

    /// Enables the `tb> ` prompt before each line.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Consumes the session, returning its writers.
    #[cfg(test)]
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Runs commands from `input` until end of input or `exit`.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(self.out, "{PROMPT}")?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, "command failed");
                    writeln!(self.err, "Error: {e}")?;
                }
                Err(e) => return Err(e),
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Parses and runs a single line of input.
    ///
    /// Blank lines and lines starting with `#` are ignored. `--help` output
    /// is written like any other command result.
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be parsed or the command fails.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = shlex::split(trimmed)
            .ok_or_else(|| CommandError::Usage("unbalanced quotes".to_string()))?;

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp) => {
                write!(self.out, "{e}")?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                let rendered = e.to_string();
                let first_line = rendered.lines().next().unwrap_or_default();
                let message = first_line.strip_prefix("error: ").unwrap_or(first_line);
                return Err(CommandError::Usage(message.to_string()));
            }
        };
        debug!(?command, "running shell command");

        if command == ShellCommand::Exit {
            return Ok(Flow::Exit);
        }

        let output = self.execute(command)?;
        if !output.is_empty() {
            write!(self.out, "{output}")?;
            if !output.ends_with('\n') {
                writeln!(self.out)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn execute(&mut self, command: ShellCommand) -> Result<String> {
        let board = &mut self.board;
        let ctx = &self.ctx;

        match command {
            ShellCommand::Add {
                name,
                category,
                assignee,
                priority,
                due,
                assigned_on,
            } => {
                let opts = AddOptions {
                    name,
                    category,
                    assignee,
                    priority,
                    due,
                    assigned_on,
                };
                commands::add::execute(board, ctx, &opts)
            }
            ShellCommand::Edit {
                task_id,
                name,
                category,
                assignee,
                priority,
                due,
                no_due,
                assigned_on,
            } => {
                let opts = EditOptions {
                    task_id,
                    name,
                    category,
                    assignee,
                    priority,
                    due,
                    no_due,
                    assigned_on,
                };
                commands::edit::execute(board, ctx, &opts)
            }
            ShellCommand::Toggle { task_id } => commands::toggle::execute(board, ctx, &task_id),
            ShellCommand::Delete { task_id } => commands::delete::execute(board, ctx, &task_id),
            ShellCommand::Filter {
                status,
                priority,
                category,
                due,
                assignee,
            } => {
                let patch = FilterPatch {
                    status,
                    priority,
                    category,
                    due_date: due,
                    assigned_user: assignee,
                };
                if patch.is_empty() {
                    return commands::filters::execute_options(board, ctx);
                }
                commands::filters::execute_set(board, ctx, patch)
            }
            ShellCommand::Clear => commands::filters::execute_clear(board, ctx),
            ShellCommand::List => commands::list::execute(board, ctx),
            ShellCommand::Show { task_id } => commands::show::execute(board, ctx, &task_id),
            ShellCommand::Options => commands::filters::execute_options(board, ctx),
            ShellCommand::Help => Ok(ShellLine::command().render_help().to_string()),
            ShellCommand::Exit => Ok(String::new()),
        }
    }
}
