//! Core logic for the terminal.
//!
//! This module provides:
//! - [`Command`] parsing and [`Interpreter`] execution
//! - [`CommandContext`], the capabilities a host lends to commands
//! - [`chat`] replies for the chat pane

pub mod chat;
mod commands;
pub mod error;
pub mod parser;

pub use commands::{
    Command, CommandContext, CommandResult, Interpreter, PathArg, execute, execute_command,
};
pub use parser::{ParsedCommand, parse_line};
