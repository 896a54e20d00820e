//! Command parsing and execution.
//!
//! This module provides:
//! - [`Command`] enum for parsed terminal commands
//! - [`CommandContext`], the capabilities a host lends to commands
//! - [`CommandResult`] for command execution results
//! - [`Interpreter`] and [`execute`] for running a line of input
//!
//! # Architecture
//!
//! A line is split by [`parse_line`], matched against the fixed command
//! table by [`Command::parse`], then run by `execute_command`. Commands
//! never touch host state directly; every side effect goes through the
//! context. A failing context operation is reported as an error result,
//! so [`Interpreter::execute`] always returns a value.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

use chrono::{DateTime, FixedOffset, Local};
use tracing::{debug, warn};

use crate::config::{HELP_TEXT, TerminalConfig};
use crate::core::error::ContextError;
use crate::core::parser::parse_line;
use crate::models::Tab;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd src`, `open /courses`).
///
/// Stored as typed; neither `cd` nor `open` validates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Context
// =============================================================================

/// Capabilities the host lends to commands.
///
/// The interpreter holds no state of its own: history, the active tab and
/// the open flag all live with the implementor. An `Err` from any method
/// aborts the running command and is shown as
/// `Error executing command: <message>`.
pub trait CommandContext {
    /// Route the host to `path`. No validation is done on the path.
    fn navigate(&mut self, path: &str) -> Result<(), ContextError>;
    fn set_active_tab(&mut self, tab: Tab) -> Result<(), ContextError>;
    /// Drop every history entry.
    fn clear_history(&mut self) -> Result<(), ContextError>;
    fn close_terminal(&mut self) -> Result<(), ContextError>;
}

impl<C: CommandContext + ?Sized> CommandContext for &mut C {
    fn navigate(&mut self, path: &str) -> Result<(), ContextError> {
        (**self).navigate(path)
    }

    fn set_active_tab(&mut self, tab: Tab) -> Result<(), ContextError> {
        (**self).set_active_tab(tab)
    }

    fn clear_history(&mut self) -> Result<(), ContextError> {
        (**self).clear_history()
    }

    fn close_terminal(&mut self) -> Result<(), ContextError> {
        (**self).close_terminal()
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Pwd,
    Ls,
    /// `None` when the directory argument is missing.
    Cd(Option<PathArg>),
    Date,
    /// Arguments rejoined with single spaces.
    Echo(String),
    /// `None` when the path argument is missing.
    Open(Option<PathArg>),
    Chat,
    Exit,
    /// Lower-cased name that matched nothing.
    Unknown(String),
}

impl Command {
    /// All registered command names.
    pub fn names() -> &'static [&'static str] {
        &[
            "help", "clear", "pwd", "ls", "cd", "date", "echo", "open", "chat", "exit",
        ]
    }

    /// Parse command from name and arguments.
    ///
    /// Matching is exact and case-insensitive; there are no aliases and no
    /// prefix matching. Extra arguments are ignored by commands that take
    /// none.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let name = name.to_lowercase();
        match name.as_str() {
            "help" => Self::Help,
            "clear" => Self::Clear,
            "pwd" => Self::Pwd,
            "ls" => Self::Ls,
            "cd" => Self::Cd(args.first().map(PathArg::new)),
            "date" => Self::Date,
            "echo" => Self::Echo(args.join(" ")),
            "open" => Self::Open(args.first().map(PathArg::new)),
            "chat" => Self::Chat,
            "exit" => Self::Exit,
            _ => Self::Unknown(name),
        }
    }
}

// =============================================================================
// Interpreter
// =============================================================================

/// Maps a line of input and a [`CommandContext`] to a [`CommandResult`].
///
/// Holds only read-only settings, so one value can serve any number of
/// sessions.
#[derive(Clone, Debug)]
pub struct Interpreter {
    working_dir: String,
    listing: String,
    clock: fn() -> DateTime<FixedOffset>,
}

impl Interpreter {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            working_dir: config.working_dir.clone(),
            listing: config.listing_text(),
            clock: local_now,
        }
    }

    /// Replace the time source used by `date`.
    pub fn with_clock(mut self, clock: fn() -> DateTime<FixedOffset>) -> Self {
        self.clock = clock;
        self
    }

    /// Path printed by `pwd`.
    pub fn working_dir(&self) -> &str {
        &self.working_dir
    }

    /// Text printed by `ls`.
    pub fn listing(&self) -> &str {
        &self.listing
    }

    /// Text printed by `help`.
    pub fn help_text(&self) -> &'static str {
        HELP_TEXT.trim_end()
    }

    pub(crate) fn now(&self) -> DateTime<FixedOffset> {
        (self.clock)()
    }

    /// Parse and run one line.
    ///
    /// Callers are expected to skip blank lines; a blank line is reported
    /// as an unknown command.
    pub fn execute<C>(&self, line: &str, ctx: &mut C) -> CommandResult
    where
        C: CommandContext + ?Sized,
    {
        let parsed = parse_line(line);
        let cmd = Command::parse(&parsed.name, &parsed.args);
        debug!(command = %parsed.name, args = parsed.args.len(), "dispatching command");

        match execute_command(cmd, self, ctx) {
            Ok(result) => result,
            Err(err) => {
                warn!(command = %parsed.name, error = %err, "command failed");
                CommandResult::error(format!("Error executing command: {}", err))
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(&TerminalConfig::default())
    }
}

fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Run one line with the default configuration.
pub fn execute<C>(line: &str, ctx: &mut C) -> CommandResult
where
    C: CommandContext + ?Sized,
{
    Interpreter::default().execute(line, ctx)
}

// =============================================================================
// Tests
// =============================================================================
