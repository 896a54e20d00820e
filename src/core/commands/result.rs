//! Command execution result type.

use serde::{Deserialize, Serialize};

/// Result of executing a command.
///
/// At most one of output or error is ever present. `system` on
/// [`CommandResult::Output`] only asks the host to style the text
/// differently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireResult", try_from = "WireResult")]
pub enum CommandResult {
    /// The command acted only through the context.
    Empty,
    /// Text to display.
    Output { text: String, system: bool },
    /// User-visible error message.
    Error(String),
}

impl CommandResult {
    /// Create a result with plain output.
    pub fn output(text: impl Into<String>) -> Self {
        Self::Output {
            text: text.into(),
            system: false,
        }
    }

    /// Create a result with output flagged as system text.
    pub fn system(text: impl Into<String>) -> Self {
        Self::Output {
            text: text.into(),
            system: true,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    /// Create an empty result.
    pub fn empty() -> Self {
        Self::Empty
    }

    pub fn output_text(&self) -> Option<&str> {
        match self {
            Self::Output { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            Self::Error(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Self::Output { system: true, .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// JSON shape shared with the web front end:
/// `{}`, `{"output": ..}`, `{"output": .., "isSystem": true}`, `{"error": ..}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct WireResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_system: Option<bool>,
}

impl From<CommandResult> for WireResult {
    fn from(result: CommandResult) -> Self {
        match result {
            CommandResult::Empty => Self {
                output: None,
                error: None,
                is_system: None,
            },
            CommandResult::Output { text, system } => Self {
                output: Some(text),
                error: None,
                is_system: system.then_some(true),
            },
            CommandResult::Error(text) => Self {
                output: None,
                error: Some(text),
                is_system: None,
            },
        }
    }
}

impl TryFrom<WireResult> for CommandResult {
    type Error = String;

    fn try_from(wire: WireResult) -> Result<Self, String> {
        let system = wire.is_system.unwrap_or(false);
        match (wire.output, wire.error) {
            (Some(_), Some(_)) => Err("result cannot carry both output and error".to_string()),
            (Some(text), None) => Ok(CommandResult::Output { text, system }),
            (None, Some(text)) => Ok(CommandResult::Error(text)),
            (None, None) => Ok(CommandResult::Empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let result = CommandResult::system("ok");
        assert_eq!(result.output_text(), Some("ok"));
        assert_eq!(result.error_text(), None);
        assert!(result.is_system());

        let result = CommandResult::error("bad");
        assert_eq!(result.output_text(), None);
        assert_eq!(result.error_text(), Some("bad"));
        assert!(result.is_error());
        assert!(!result.is_system());

        assert!(CommandResult::empty().is_empty());
        assert!(!CommandResult::output("plain").is_system());
    }

    #[test]
    fn test_serialize_shapes() {
        assert_eq!(serde_json::to_value(CommandResult::Empty).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(CommandResult::system("/home/project")).unwrap(),
            json!({ "output": "/home/project", "isSystem": true })
        );
        assert_eq!(
            serde_json::to_value(CommandResult::output("hi")).unwrap(),
            json!({ "output": "hi" })
        );
        assert_eq!(
            serde_json::to_value(CommandResult::error("cd: missing directory argument")).unwrap(),
            json!({ "error": "cd: missing directory argument" })
        );
    }

    #[test]
    fn test_deserialize_rejects_output_and_error() {
        let parsed: Result<CommandResult, _> =
            serde_json::from_value(json!({ "output": "a", "error": "b" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_deserialize_system_output() {
        let parsed: CommandResult =
            serde_json::from_value(json!({ "output": "a b c", "isSystem": true })).unwrap();
        assert_eq!(parsed, CommandResult::system("a b c"));
    }
}
