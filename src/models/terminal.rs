//! Terminal-related data types held by a session.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::CommandResult;

// Global counter for generating unique IDs
static ENTRY_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Which pane of the terminal window receives input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Terminal,
    Chat,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => f.write_str("terminal"),
            Self::Chat => f.write_str("chat"),
        }
    }
}

/// One submitted command and what it printed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique ID for keying rendered rows
    #[serde(skip)]
    pub id: usize,
    /// The line as the user typed it
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub is_error: bool,
    pub is_system: bool,
}

impl HistoryEntry {
    /// Build an entry from a submitted line and its result.
    ///
    /// Error text takes the output slot with `is_error` set.
    pub fn from_result(text: impl Into<String>, result: &CommandResult) -> Self {
        let (output, is_error, is_system) = match result {
            CommandResult::Empty => (None, false, false),
            CommandResult::Output { text, system } => (Some(text.clone()), false, *system),
            CommandResult::Error(text) => (Some(text.clone()), true, false),
        };
        Self {
            id: next_id(),
            text: text.into(),
            output,
            is_error,
            is_system,
        }
    }
}

impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.text == other.text
            && self.output == other.output
            && self.is_error == other.is_error
            && self.is_system == other.is_system
    }
}

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A message in the chat pane.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: usize,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: next_id(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}
