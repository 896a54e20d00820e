//! Terminal session state.
//!
//! A [`TerminalSession`] is the host side of the interpreter: it owns the
//! history entries, the active tab, the open flag, the current route, the
//! input recall list and the chat log, and lends the interpreter the four
//! capabilities it may use on them.

use tracing::trace;

use crate::config::{DEFAULT_ROUTE, TerminalConfig, prompt};
use crate::core::error::ContextError;
use crate::core::{CommandContext, CommandResult, Interpreter, chat};
use crate::models::{ChatMessage, HistoryEntry, Tab};
use crate::utils::RingBuffer;

// ============================================================================
// Submission
// ============================================================================

/// What a submitted line produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// The line ran on the terminal tab.
    Command(CommandResult),
    /// The line was sent on the chat tab; this is the assistant's reply.
    Chat(ChatMessage),
}

// ============================================================================
// TerminalSession
// ============================================================================

/// State of one terminal window.
///
/// History entries and chat messages are bounded by ring buffers; the
/// oldest are dropped first.
#[derive(Clone, Debug)]
pub struct TerminalSession {
    interpreter: Interpreter,
    welcome: String,
    open: bool,
    active_tab: Tab,
    route: String,
    history: RingBuffer<HistoryEntry>,
    messages: RingBuffer<ChatMessage>,
    /// Submitted terminal lines for up/down recall.
    command_history: RingBuffer<String>,
    /// Offset from the newest recalled line; `None` when not recalling.
    history_index: Option<usize>,
}

impl TerminalSession {
    /// Creates a closed session on the terminal tab.
    ///
    /// # Panics
    ///
    /// Panics if `max_history` or `max_command_history` is zero. Configs
    /// from [`TerminalConfig::load`] are already validated; call
    /// [`TerminalConfig::validate`] on ones built in code.
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            interpreter: Interpreter::new(config),
            welcome: config.welcome.clone(),
            open: false,
            active_tab: Tab::Terminal,
            route: DEFAULT_ROUTE.to_string(),
            history: RingBuffer::new(config.max_history),
            messages: RingBuffer::new(config.max_history),
            command_history: RingBuffer::new(config.max_command_history),
            history_index: None,
        }
    }

    /// Use a custom interpreter, e.g. one with a fixed clock.
    pub fn with_interpreter(mut self, interpreter: Interpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Route last requested through `open`.
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn history(&self) -> &RingBuffer<HistoryEntry> {
        &self.history
    }

    pub fn messages(&self) -> &RingBuffer<ChatMessage> {
        &self.messages
    }

    /// Prompt marker for the active tab.
    pub fn prompt(&self) -> &'static str {
        match self.active_tab {
            Tab::Terminal => prompt::TERMINAL,
            Tab::Chat => prompt::CHAT,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the window and wipe what it showed.
    ///
    /// Unlike `exit`, this drops history, chat messages and recall state.
    pub fn close(&mut self) {
        self.open = false;
        self.history.clear();
        self.messages.clear();
        self.command_history.clear();
        self.history_index = None;
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.history_index = None;
    }

    /// Submit a line to the active tab.
    ///
    /// Returns `None` for blank input or while the window is closed.
    pub fn submit(&mut self, input: &str) -> Option<Submission> {
        if !self.open || input.trim().is_empty() {
            return None;
        }
        self.history_index = None;

        let submission = match self.active_tab {
            Tab::Terminal => {
                self.add_to_command_history(input);
                Submission::Command(self.run_command(input))
            }
            Tab::Chat => Submission::Chat(self.send_chat(input)),
        };
        Some(submission)
    }

    /// Run a line through the interpreter and record it.
    ///
    /// The entry is appended after execution, so a `clear` leaves the
    /// history empty rather than holding the `clear` line itself.
    fn run_command(&mut self, input: &str) -> CommandResult {
        let mut effects = SessionEffects {
            history: &mut self.history,
            active_tab: &mut self.active_tab,
            open: &mut self.open,
            route: &mut self.route,
            cleared: false,
        };
        let result = self.interpreter.execute(input, &mut effects);

        if !effects.cleared {
            self.history.push(HistoryEntry::from_result(input, &result));
        }
        trace!(entries = self.history.len(), "recorded command");
        result
    }

    fn send_chat(&mut self, input: &str) -> ChatMessage {
        self.messages.push(ChatMessage::user(input));
        let reply = ChatMessage::bot(chat::respond(input));
        self.messages.push(reply.clone());
        trace!(messages = self.messages.len(), "recorded chat exchange");
        reply
    }

    fn add_to_command_history(&mut self, cmd: &str) {
        if self.command_history.last().map(String::as_str) != Some(cmd) {
            self.command_history.push(cmd.to_string());
        }
    }

    /// Step back to an older submitted line.
    ///
    /// Returns `None` when there is nothing older, leaving the input as is.
    /// Recall only works on the terminal tab.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.active_tab != Tab::Terminal {
            return None;
        }
        let len = self.command_history.len();
        let next = match self.history_index {
            None if len > 0 => 0,
            Some(i) if i + 1 < len => i + 1,
            _ => return None,
        };
        self.history_index = Some(next);
        self.command_history.get(len - 1 - next).cloned()
    }

    /// Step forward to a newer submitted line.
    ///
    /// Stepping past the newest line yields an empty input. Returns `None`
    /// when not recalling or not on the terminal tab.
    pub fn recall_next(&mut self) -> Option<String> {
        if self.active_tab != Tab::Terminal {
            return None;
        }
        let len = self.command_history.len();
        match self.history_index? {
            0 => {
                self.history_index = None;
                Some(String::new())
            }
            i => {
                self.history_index = Some(i - 1);
                self.command_history.get(len - i).cloned()
            }
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new(&TerminalConfig::default())
    }
}

// ============================================================================
// Capabilities
// ============================================================================

/// Borrowed view of the session handed to the interpreter for one call.
struct SessionEffects<'a> {
    history: &'a mut RingBuffer<HistoryEntry>,
    active_tab: &'a mut Tab,
    open: &'a mut bool,
    route: &'a mut String,
    cleared: bool,
}

impl CommandContext for SessionEffects<'_> {
    fn navigate(&mut self, path: &str) -> Result<(), ContextError> {
        trace!(path, "navigate");
        *self.route = path.to_string();
        Ok(())
    }

    fn set_active_tab(&mut self, tab: Tab) -> Result<(), ContextError> {
        *self.active_tab = tab;
        Ok(())
    }

    fn clear_history(&mut self) -> Result<(), ContextError> {
        self.history.clear();
        self.cleared = true;
        Ok(())
    }

    fn close_terminal(&mut self) -> Result<(), ContextError> {
        *self.open = false;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
