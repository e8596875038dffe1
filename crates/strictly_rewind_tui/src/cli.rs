//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_rewind::Position;

/// Strictly Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the log file from the config
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Feed cell clicks without a terminal UI and print the result
    Script {
        /// Cells to click in order (1-9 or labels such as "center")
        cells: Vec<Position>,

        /// History entry to select after the clicks
        #[arg(long)]
        select: Option<usize>,

        /// Print the final session as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the subcommand, falling back to `play`.
    pub fn command_or_play(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
