//! Data models held by a terminal session.
//!
//! - [`Tab`] - which pane receives input
//! - [`HistoryEntry`] - a submitted command and its output
//! - [`ChatMessage`], [`Sender`] - chat pane messages

mod terminal;

pub use terminal::{ChatMessage, HistoryEntry, Sender, Tab};
