//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_rewind.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    logging: LoggingConfig,

    /// Rendering settings for the terminal UI.
    #[serde(default)]
    display: DisplayConfig,
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file written while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    filter: String,
}

/// Terminal UI rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the cell identifier in empty cells.
    #[serde(default = "default_true")]
    show_cell_ids: bool,

    /// Highlight the three cells of a winning line.
    #[serde(default = "default_true")]
    highlight_winning_line: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_rewind.log")
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_filter(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_cell_ids: true,
            highlight_winning_line: true,
        }
    }
}

impl LoggingConfig {
    /// Replaces the log file path.
    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = file;
        self
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads the explicit file if given, else the default file if it
    /// exists, else built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the log file (from the command line).
    pub fn with_log_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.logging = self.logging.with_file(file);
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

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging().filter(), "info");
        assert!(*config.display().show_cell_ids());
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [display]
            show_cell_ids = false
            "#,
        )
        .expect("valid config");

        assert!(!*config.display().show_cell_ids());
        assert!(*config.display().highlight_winning_line());
        assert_eq!(config.logging(), &LoggingConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml("[display\nshow_cell_ids = 3").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_log_file_override() {
        let config = AppConfig::default().with_log_file(Some(PathBuf::from("/tmp/x.log")));
        assert_eq!(config.logging().file(), &PathBuf::from("/tmp/x.log"));

        let unchanged = AppConfig::default().with_log_file(None);
        assert_eq!(unchanged.logging().file(), &default_log_file());
    }
}
