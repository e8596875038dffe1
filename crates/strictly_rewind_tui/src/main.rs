//! Strictly Rewind - CLI entry point

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_rewind_tui::{AppConfig, Cli, Command, LogTarget, ScriptOptions, logging, script, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_log_file(cli.log_file.clone());

    match cli.command_or_play() {
        Command::Play => {
            logging::init(config.logging(), LogTarget::File)?;
            info!(?config, "Configuration loaded");
            tui::run_tui(*config.display())
        }
        Command::Script { cells, select, json } => {
            logging::init(config.logging(), LogTarget::Stderr)?;
            let options = ScriptOptions { cells, select, json };
            let stdout = std::io::stdout();
            script::run(&options, &mut stdout.lock())
        }
    }
}
