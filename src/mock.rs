//! Test double for [`CommandContext`].
//!
//! Available with the `mock` feature.

use crate::core::CommandContext;
use crate::core::error::ContextError;
use crate::models::Tab;

/// One capability call seen by [`MockContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextCall {
    Navigate(String),
    SetActiveTab(Tab),
    ClearHistory,
    CloseTerminal,
}

/// Which operation [`MockContext`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Navigate,
    SetActiveTab,
    ClearHistory,
    CloseTerminal,
}

/// Records every call and optionally fails one operation.
#[derive(Debug, Default)]
pub struct MockContext {
    calls: Vec<ContextCall>,
    failure: Option<(Operation, String)>,
}

impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `operation` return `Err` with `message`.
    pub fn failing(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            failure: Some((operation, message.into())),
        }
    }

    pub fn calls(&self) -> &[ContextCall] {
        &self.calls
    }

    /// Number of recorded calls matching `call`.
    pub fn count(&self, call: &ContextCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn record(&mut self, operation: Operation, call: ContextCall) -> Result<(), ContextError> {
        if let Some((failing, message)) = &self.failure
            && *failing == operation
        {
            return Err(ContextError::new(message.clone()));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl CommandContext for MockContext {
    fn navigate(&mut self, path: &str) -> Result<(), ContextError> {
        self.record(Operation::Navigate, ContextCall::Navigate(path.to_string()))
    }

    fn set_active_tab(&mut self, tab: Tab) -> Result<(), ContextError> {
        self.record(Operation::SetActiveTab, ContextCall::SetActiveTab(tab))
    }

    fn clear_history(&mut self) -> Result<(), ContextError> {
        self.record(Operation::ClearHistory, ContextCall::ClearHistory)
    }

    fn close_terminal(&mut self) -> Result<(), ContextError> {
        self.record(Operation::CloseTerminal, ContextCall::CloseTerminal)
    }
}
