//! Tracing setup.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The configured log file. Used while the terminal UI owns the screen.
    File,
    /// Standard error. Used by headless modes whose stdout is the report.
    Stderr,
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter()))
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
///
/// Returns false if a subscriber was already installed; it stays in place.
pub fn init(config: &LoggingConfig, target: LogTarget) -> Result<bool> {
    let installed = match target {
        LogTarget::File => {
            let log_file = std::fs::File::create(config.file()).with_context(|| {
                format!("Failed to create log file {}", config.file().display())
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(config))
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init()
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(config))
                .with_writer(std::io::stderr)
                .try_init()
        }
    };

    match installed {
        Ok(()) => {
            info!(?target, "Logging initialized");
            Ok(true)
        }
        Err(e) => {
            debug!(?target, error = %e, "Subscriber already installed, keeping it");
            Ok(false)
        }
    }
}
