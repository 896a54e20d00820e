//! Application configuration.
//!
//! Centralizes the configuration constants used throughout the terminal.
//! Text assets are loaded at compile time using `include_str!`, and a
//! [`TerminalConfig`] can be overridden from a TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Default directory listing for `ls` command.
pub const LISTING_TEXT: &str = include_str!("../assets/text/listing.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Banner shown above the terminal history.
pub const WELCOME_TEXT: &str = "Welcome to Aether Terminal. Type 'help' for available commands.";

/// Working directory reported by `pwd`.
pub const DEFAULT_WORKING_DIR: &str = "/home/project";

/// Route the session starts on before any `open`.
pub const DEFAULT_ROUTE: &str = "/";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of history entries to keep.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of submitted lines kept for input recall.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Prompt markers for the two tabs.
pub mod prompt {
    pub const TERMINAL: &str = "$";
    pub const CHAT: &str = ">";
}

/// Simulated assistant typing delay (milliseconds).
pub mod chat_delay {
    /// Minimum delay before a reply appears.
    pub const BASE_MS: u64 = 1000;
    /// Upper bound (exclusive) of the random jitter added to `BASE_MS`.
    pub const JITTER_MS: u64 = 500;
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Overridable terminal settings.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// working_dir = "/home/learner"
/// listing = ["notebooks/", "README.md"]
/// max_history = 200
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Path printed by `pwd`.
    pub working_dir: String,
    /// Entries printed by `ls`, one per line.
    pub listing: Vec<String>,
    /// Banner line shown when the terminal opens.
    pub welcome: String,
    /// Capacity of the history entry buffer.
    pub max_history: usize,
    /// Capacity of the input recall list.
    pub max_command_history: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            working_dir: DEFAULT_WORKING_DIR.to_string(),
            listing: LISTING_TEXT.lines().map(str::to_string).collect(),
            welcome: WELCOME_TEXT.to_string(),
            max_history: MAX_TERMINAL_HISTORY,
            max_command_history: MAX_COMMAND_HISTORY,
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.working_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("working_dir must not be empty"));
        }
        if self.max_history == 0 {
            return Err(ConfigError::Invalid("max_history must be greater than 0"));
        }
        if self.max_command_history == 0 {
            return Err(ConfigError::Invalid(
                "max_command_history must be greater than 0",
            ));
        }
        Ok(())
    }

    /// The `ls` output block.
    pub fn listing_text(&self) -> String {
        self.listing.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_assets() {
        let config = TerminalConfig::default();
        assert_eq!(config.working_dir, "/home/project");
        assert_eq!(config.listing.first().map(String::as_str), Some("src/"));
        assert_eq!(config.listing.last().map(String::as_str), Some("vite.config.ts"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_listing_text_has_no_trailing_newline() {
        let text = TerminalConfig::default().listing_text();
        assert!(text.starts_with("src/\nnode_modules/"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TerminalConfig::from_toml_str(
            r#"
working_dir = "/home/learner"
max_history = 5
"#,
        )
        .unwrap();
        assert_eq!(config.working_dir, "/home/learner");
        assert_eq!(config.max_history, 5);
        assert_eq!(config.max_command_history, MAX_COMMAND_HISTORY);
        assert_eq!(config.welcome, WELCOME_TEXT);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            TerminalConfig::from_toml_str("").unwrap(),
            TerminalConfig::default()
        );
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = TerminalConfig::from_toml_str("max_history = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = TerminalConfig::from_toml_str("max_command_history = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_blank_working_dir() {
        let err = TerminalConfig::from_toml_str(r#"working_dir = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = TerminalConfig::from_toml_str("prompt = \"#\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TerminalConfig::load("/nonexistent/aether.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/aether.toml"));
    }
}
