//! The sync runner
//!
//! Mirrors the canonical source into each manifest target in declared order.
//! A missing source aborts before any target is touched; a directory or copy
//! failure aborts the remaining targets.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::io;
use crate::manifest::SyncManifest;
use crate::path::display_relative;
use crate::staleness::{self, Staleness};
use crate::{Error, Result};

/// What happened to a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetAction {
    /// The source was copied over the target.
    Updated,
    /// Dry run: the target is stale and would have been copied.
    WouldUpdate,
    /// The target already matched the source.
    UpToDate,
}

/// Per-target result, reported as soon as the target is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetOutcome {
    /// Absolute target path.
    pub target: PathBuf,
    /// Target path relative to the root, or absolute if that is not possible.
    pub display: String,
    pub action: TargetAction,
}

/// Result of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub outcomes: Vec<TargetOutcome>,
}

impl SyncReport {
    /// Number of targets copied (or that would be copied in a dry run).
    pub fn updated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.action != TargetAction::UpToDate)
            .count()
    }

    /// True when no target needed copying.
    pub fn is_in_sync(&self) -> bool {
        self.updated_count() == 0
    }
}

/// Copies the manifest source into every stale target under a root.
#[derive(Debug, Clone)]
pub struct SyncRunner {
    root: PathBuf,
    manifest: SyncManifest,
    dry_run: bool,
}

impl SyncRunner {
    /// Create a runner for `root` using the built-in manifest.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_manifest(root, SyncManifest::default())
    }

    pub fn with_manifest(root: impl Into<PathBuf>, manifest: SyncManifest) -> Self {
        Self {
            root: root.into(),
            manifest,
            dry_run: false,
        }
    }

    /// Only evaluate staleness; create no directories and copy nothing.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Absolute path of the canonical source.
    pub fn source_path(&self) -> PathBuf {
        self.manifest.source_path(&self.root)
    }

    /// Run the sync and collect the outcomes.
    pub fn run(&self) -> Result<SyncReport> {
        self.run_with(|_| {})
    }

    /// Run the sync, calling `on_outcome` after each target is processed.
    ///
    /// Outcomes reported before an error are final: those copies happened.
    pub fn run_with<F>(&self, mut on_outcome: F) -> Result<SyncReport>
    where
        F: FnMut(&TargetOutcome),
    {
        let source = self.source_path();
        if !source.is_file() {
            return Err(Error::MissingSource { path: source });
        }

        tracing::debug!(
            root = %self.root.display(),
            source = %source.display(),
            targets = self.manifest.targets.len(),
            dry_run = self.dry_run,
            "Starting sync"
        );

        let mut report = SyncReport::default();
        for target in self.manifest.target_paths(&self.root) {
            let outcome = self.sync_target(&source, target)?;
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        tracing::debug!(updated = report.updated_count(), "Sync finished");
        Ok(report)
    }

    fn sync_target(&self, source: &Path, target: PathBuf) -> Result<TargetOutcome> {
        if !self.dry_run {
            io::ensure_parent_dir(&target)?;
        }

        let staleness = staleness::check(source, &target);
        match &staleness {
            Staleness::Fresh => tracing::debug!(path = %target.display(), "Up to date"),
            Staleness::Stale(reason) => tracing::debug!(path = %target.display(), %reason, "Stale"),
            Staleness::Unknown { reason } => {
                tracing::warn!(path = %target.display(), %reason, "Could not compare, copying anyway");
            }
        }

        let action = if staleness.needs_copy() {
            self.copy(source, &target)?
        } else {
            TargetAction::UpToDate
        };

        Ok(TargetOutcome {
            display: display_relative(&self.root, &target),
            target,
            action,
        })
    }

    fn copy(&self, source: &Path, target: &Path) -> Result<TargetAction> {
        if self.dry_run {
            return Ok(TargetAction::WouldUpdate);
        }
        let bytes = io::copy_file(source, target)?;
        tracing::info!(path = %target.display(), bytes, "Updated");
        Ok(TargetAction::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::RelativePath;
    use std::fs;
    use tempfile::TempDir;

    fn small_manifest() -> SyncManifest {
        SyncManifest::new(
            "res/lib.dll",
            vec![RelativePath::parse("out/lib.dll"), RelativePath::parse("out/deep/er/lib.dll")],
        )
    }

    #[test]
    fn report_counts_updates() {
        let report = SyncReport {
            outcomes: vec![
                TargetOutcome {
                    target: PathBuf::from("/r/a"),
                    display: "a".into(),
                    action: TargetAction::Updated,
                },
                TargetOutcome {
                    target: PathBuf::from("/r/b"),
                    display: "b".into(),
                    action: TargetAction::UpToDate,
                },
            ],
        };
        assert_eq!(report.updated_count(), 1);
        assert!(!report.is_in_sync());
        assert!(SyncReport::default().is_in_sync());
    }

    #[test]
    fn missing_source_is_reported_with_absolute_path() {
        let temp = TempDir::new().unwrap();
        let runner = SyncRunner::with_manifest(temp.path(), small_manifest());

        let err = runner.run().unwrap_err();

        assert!(err.is_missing_source());
        assert!(err.to_string().contains(&temp.path().join("res").join("lib.dll").display().to_string()));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn callback_sees_outcomes_in_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("res")).unwrap();
        fs::write(temp.path().join("res/lib.dll"), b"payload").unwrap();
        let runner = SyncRunner::with_manifest(temp.path(), small_manifest());

        let mut seen = Vec::new();
        let report = runner.run_with(|o| seen.push(o.display.clone())).unwrap();

        assert_eq!(seen, vec!["out/lib.dll", "out/deep/er/lib.dll"]);
        assert_eq!(report.updated_count(), 2);
    }

    #[test]
    fn dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("res")).unwrap();
        fs::write(temp.path().join("res/lib.dll"), b"payload").unwrap();
        let runner = SyncRunner::with_manifest(temp.path(), small_manifest()).dry_run(true);

        let report = runner.run().unwrap();

        assert!(report.outcomes.iter().all(|o| o.action == TargetAction::WouldUpdate));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn outcomes_serialize_with_snake_case_actions() {
        let outcome = TargetOutcome {
            target: PathBuf::from("/r/a.dll"),
            display: "a.dll".into(),
            action: TargetAction::WouldUpdate,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["action"], "would_update");
        assert_eq!(json["display"], "a.dll");
    }
}
