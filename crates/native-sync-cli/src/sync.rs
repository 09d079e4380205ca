//! The sync command
//!
//! Drives [`SyncRunner`] and prints one tagged line per copied target, or a
//! single "already in sync" line when nothing changed.

use std::path::Path;

use colored::Colorize;

use native_sync_core::{SyncReport, SyncRunner, TargetAction, TargetOutcome};

use crate::error::Result;

/// Tag prefixed to every line this tool prints.
pub const TAG: &str = "[sync-onnxruntime]";

/// Run the sync for `root`.
pub fn run_sync(root: &Path, dry_run: bool, json: bool) -> Result<()> {
    let runner = SyncRunner::new(root).dry_run(dry_run);
    tracing::debug!(source = %runner.source_path().display(), "Resolved canonical DLL");

    if json {
        return print_json(&runner);
    }

    let report = runner.run_with(print_outcome)?;
    print_summary(&report);
    Ok(())
}

/// Print the report as JSON, including the targets finished before a fault.
fn print_json(runner: &SyncRunner) -> Result<()> {
    let mut report = SyncReport::default();
    let result = runner.run_with(|o| report.outcomes.push(o.clone()));
    match result {
        Err(e) if e.is_missing_source() => Err(e.into()),
        result => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            result?;
            Ok(())
        }
    }
}

fn print_outcome(outcome: &TargetOutcome) {
    match outcome.action {
        TargetAction::Updated => {
            println!("{} Updated {}", TAG.cyan(), outcome.display);
        }
        TargetAction::WouldUpdate => {
            println!("{} Would update {}", TAG.cyan(), outcome.display);
        }
        TargetAction::UpToDate => {}
    }
}

fn print_summary(report: &SyncReport) {
    if report.is_in_sync() {
        println!("{} DLL already in sync", TAG.cyan());
    }
}
