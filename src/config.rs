//! Terminal UI configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal client, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Show the move list newest first.
    #[serde(default)]
    descending: bool,

    /// File receiving logs while the terminal is in raw mode.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_timetravel.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            descending: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(descending = config.descending, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, descending: bool, log_file: Option<PathBuf>) -> Self {
        self.descending |= descending;
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
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
    use std::io::Write;

    #[test]
    fn test_defaults_when_no_path() {
        let config = TuiConfig::load(None).unwrap();
        assert!(!*config.descending());
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe_timetravel.log"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "descending = true").unwrap();
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert!(*config.descending());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_overrides() {
        let config = TuiConfig::default().with_overrides(true, Some("game.log".into()));
        assert!(*config.descending());
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_bad_file_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "descending = \"sometimes\"").unwrap();
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));

        let err = TuiConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
