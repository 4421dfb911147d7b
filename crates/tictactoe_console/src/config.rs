//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::SessionSettings;
use tracing::{debug, instrument};

/// Top-level configuration file contents.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log filter used when `RUST_LOG` is not set.
    log_filter: String,
    /// Session defaults.
    session: SessionSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            session: SessionSettings::default(),
        }
    }
}

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

fn default_log_filter() -> String {
    "warn".to_string()
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from an explicitly requested path, or from
    /// [`DEFAULT_CONFIG_PATH`] when none was given.
    ///
    /// Only the default file may be absent. Returns whether a file was read
    /// alongside the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a requested file does not exist, or if any
    /// file that exists cannot be read or parsed.
    #[instrument]
    pub fn load(requested: Option<&Path>) -> Result<(Self, bool), ConfigError> {
        match requested {
            Some(path) if !path.exists() => Err(ConfigError::new(format!(
                "Config file not found: {}",
                path.display()
            ))),
            Some(path) => Ok((Self::from_file(path)?, true)),
            None => Self::load_or_default(DEFAULT_CONFIG_PATH),
        }
    }

    /// Loads configuration, using defaults when the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<(Self, bool), ConfigError> {
        if path.as_ref().exists() {
            Ok((Self::from_file(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::GameMode;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.session().ai_name(), "Computer");
        assert!(*config.session().show_instructions());
    }

    #[test]
    fn test_partial_session_table() {
        let config: AppConfig = toml::from_str(
            r#"
log_filter = "debug"

[session]
ai_name = "HAL"
mode = "ai"
"#,
        )
        .unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.session().ai_name(), "HAL");
        assert_eq!(*config.session().mode(), Some(GameMode::VsAi));
        assert!(*config.session().show_instructions());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[session]\nmode = \"robot\"\n");
        assert!(result.is_err());
    }
}
