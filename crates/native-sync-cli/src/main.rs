//! sync-onnxruntime
//!
//! Keeps the ONNX Runtime DLL copies in a Tauri project in step with the
//! canonical file under `src-tauri/resources/onnxruntime/`.

mod cli;
mod error;
mod sync;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};
use sync::TAG;

fn main() {
    if let Err(e) = run() {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{} could not install log subscriber", TAG.yellow());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let root = resolve_root(cli.root)?;
    tracing::debug!(root = %root.display(), "Using sync root");

    sync::run_sync(&root, cli.dry_run, cli.json)
}

/// Root from `--root`, or discovered from the executable location.
fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let root = match explicit {
        Some(dir) => native_sync_core::resolve_root(&dir)?,
        None => native_sync_core::discover_root()?,
    };
    Ok(root)
}

fn report_error(e: &CliError) {
    colored::control::set_override(std::io::stderr().is_terminal());
    if e.is_missing_source() {
        eprintln!("{} {}", TAG.red(), e);
    } else {
        eprintln!("{} {}: {}", TAG.red(), "error".red().bold(), e);
    }
}
