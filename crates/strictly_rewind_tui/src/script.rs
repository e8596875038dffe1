//! Headless presentation: feed clicks, print the outcome.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use strictly_rewind::{Controller, Intent, Position, Session};
use tracing::{info, instrument};

/// What to feed the controller.
#[derive(Debug, Clone, Default)]
pub struct ScriptOptions {
    /// Cells to click, in order.
    pub cells: Vec<Position>,
    /// History entry to select after the clicks.
    pub select: Option<usize>,
    /// Emit JSON instead of text.
    pub json: bool,
}

#[derive(Serialize)]
struct ScriptReport<'a> {
    notifications: &'a [String],
    session: &'a Session,
}

/// Runs the script, writing notifications and the final state to `out`.
///
/// Notifications are surfaced after each intent has been committed, the
/// same order the terminal UI uses.
#[instrument(skip(out))]
pub fn run(options: &ScriptOptions, out: &mut dyn Write) -> Result<()> {
    let mut controller = Controller::new();
    let mut notifications = Vec::new();

    for &cell in &options.cells {
        controller.handle(Intent::CellClicked(cell))?;
        if let Some(notice) = controller.take_notification() {
            if !options.json {
                writeln!(out, "! {}", notice)?;
            }
            notifications.push(notice.to_string());
        }
    }

    if let Some(sequence) = options.select {
        controller
            .handle(Intent::HistoryEntryClicked(sequence))
            .context("Failed to select history entry")?;
    }

    info!(
        moves = controller.current(),
        status = %controller.status_text(),
        "Script finished"
    );

    if options.json {
        let report = ScriptReport {
            notifications: &notifications,
            session: controller.session(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", controller.board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", controller.status_text())?;
    writeln!(out)?;
    for entry in controller.history() {
        let marker = if entry.sequence() == controller.current() {
            '>'
        } else {
            ' '
        };
        writeln!(out, "{} {}. {}", marker, entry.sequence(), entry.label())?;
    }
    Ok(())
}
