//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Copy the canonical ONNX Runtime DLL into the Tauri build directories
///
/// With no arguments the root is the parent of the directory holding this
/// executable, and every stale copy of
/// src-tauri/resources/onnxruntime/onnxruntime.dll is refreshed.
#[derive(Parser, Debug)]
#[command(name = "sync-onnxruntime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root to sync instead of the discovered one
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report stale targets without copying anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the sync report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn zero_arguments_use_defaults() {
        let cli = Cli::parse_from(["sync-onnxruntime"]);
        assert!(cli.root.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::parse_from([
            "sync-onnxruntime",
            "--root",
            "/work/app",
            "--dry-run",
            "--json",
            "-v",
        ]);
        assert_eq!(cli.root, Some(PathBuf::from("/work/app")));
        assert!(cli.dry_run);
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["sync-onnxruntime", "extra"]).is_err());
    }
}
