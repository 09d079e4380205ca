//! Target staleness check
//!
//! A target needs copying when it is missing, differs in size from the
//! source, or is older than the source. Metadata that cannot be read yields
//! [`Staleness::Unknown`], which callers treat the same as stale.

use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::Path;

/// Why a target was judged stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// No file exists at the target path.
    Missing,
    /// Byte sizes differ.
    SizeMismatch { source: u64, target: u64 },
    /// The source was modified strictly after the target.
    Older,
}

impl std::fmt::Display for StaleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::SizeMismatch { source, target } => {
                write!(f, "size differs (source {source} bytes, target {target} bytes)")
            }
            Self::Older => write!(f, "older than source"),
        }
    }
}

/// Outcome of comparing a target against the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    Stale(StaleReason),
    Fresh,
    /// Metadata could not be read for one of the files.
    Unknown { reason: String },
}

impl Staleness {
    /// Whether the target should be copied. `Unknown` errs toward copying.
    pub fn needs_copy(&self) -> bool {
        !matches!(self, Self::Fresh)
    }
}

/// Compare `target` against `source` by existence, size and mtime.
pub fn check(source: &Path, target: &Path) -> Staleness {
    let target_meta = match std::fs::metadata(target) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Staleness::Stale(StaleReason::Missing);
        }
        Err(e) => return unknown("target", target, e),
    };
    let source_meta = match std::fs::metadata(source) {
        Ok(meta) => meta,
        Err(e) => return unknown("source", source, e),
    };

    compare(&source_meta, &target_meta)
}

fn compare(source: &Metadata, target: &Metadata) -> Staleness {
    if !target.is_file() {
        return Staleness::Unknown {
            reason: "target is not a regular file".to_string(),
        };
    }

    if source.len() != target.len() {
        return Staleness::Stale(StaleReason::SizeMismatch {
            source: source.len(),
            target: target.len(),
        });
    }

    match (source.modified(), target.modified()) {
        (Ok(src), Ok(dst)) if src > dst => Staleness::Stale(StaleReason::Older),
        (Ok(_), Ok(_)) => Staleness::Fresh,
        (Err(e), _) | (_, Err(e)) => Staleness::Unknown {
            reason: format!("modification time unavailable: {e}"),
        },
    }
}

fn unknown(which: &str, path: &Path, error: std::io::Error) -> Staleness {
    Staleness::Unknown {
        reason: format!("cannot read {which} metadata at {}: {error}", path.display()),
    }
}
