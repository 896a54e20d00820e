//! Aether Terminal: the command interpreter behind the learning platform's
//! in-app terminal.
//!
//! ```
//! use aether_terminal::{CommandResult, TerminalSession};
//! use aether_terminal::session::Submission;
//!
//! let mut session = TerminalSession::default();
//! session.open();
//! assert_eq!(
//!     session.submit("echo hello   world"),
//!     Some(Submission::Command(CommandResult::system("hello world")))
//! );
//! ```

pub mod config;
pub mod core;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod models;
pub mod session;
pub mod utils;

pub use config::TerminalConfig;
pub use crate::core::error::{ConfigError, ContextError};
pub use crate::core::{Command, CommandContext, CommandResult, Interpreter, execute};
pub use models::{ChatMessage, HistoryEntry, Sender, Tab};
pub use session::TerminalSession;
