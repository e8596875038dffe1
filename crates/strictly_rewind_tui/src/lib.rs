//! Strictly Rewind presentation layer
//!
//! Terminal UI and headless script runner on top of the
//! [`strictly_rewind`] game logic.
//!
//! # Architecture
//!
//! - **CLI**: subcommands and global flags ([`cli`])
//! - **Config**: TOML settings with defaults ([`config`])
//! - **Logging**: tracing to a file or stderr ([`logging`])
//! - **Script**: feed clicks, print the outcome ([`script`])
//! - **TUI**: ratatui front end ([`tui`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DisplayConfig, LoggingConfig};
pub use logging::LogTarget;
pub use script::ScriptOptions;
