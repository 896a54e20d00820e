//! Error types for the terminal.
//!
//! Command failures are never Rust errors: the interpreter reports them as
//! [`CommandResult::Error`](crate::core::CommandResult) text. The types here
//! cover the seams where something outside the interpreter can fail:
//!
//! - [`ContextError`] - a capability operation supplied by the host failed
//! - [`ConfigError`] - loading or validating a [`TerminalConfig`](crate::config::TerminalConfig)

use thiserror::Error;

/// Failure reported by a [`CommandContext`](crate::core::CommandContext) operation.
///
/// The message is shown to the user verbatim after
/// `Error executing command: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ContextError {
    message: String,
}

impl ContextError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for ContextError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ContextError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Config parsed but violates a constraint.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_error_display() {
        let err = ContextError::new("router unavailable");
        assert_eq!(err.to_string(), "router unavailable");
        assert_eq!(err.message(), "router unavailable");
    }

    #[test]
    fn test_context_error_from_str() {
        let err: ContextError = "boom".into();
        assert_eq!(err, ContextError::new("boom"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid("max_history must be greater than 0");
        assert_eq!(
            err.to_string(),
            "invalid config: max_history must be greater than 0"
        );
    }
}
