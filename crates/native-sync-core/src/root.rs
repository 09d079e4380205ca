//! Sync root discovery
//!
//! The root is the parent of the directory holding the running program, so a
//! binary installed as `<root>/scripts/sync-onnxruntime` syncs `<root>`.
//! Discovery runs once at startup; everything after it takes the root as an
//! explicit argument.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Discover the root from the location of the current executable.
pub fn discover_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::root_discovery(format!("cannot locate current executable: {e}")))?;
    root_from_program(&exe)
}

/// Root for a program at `program`: the parent of its containing directory.
pub fn root_from_program(program: &Path) -> Result<PathBuf> {
    let program = absolutize(program)?;
    let root = program
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| {
            Error::root_discovery(format!(
                "{} has no grandparent directory",
                program.display()
            ))
        })?;
    Ok(canonical_or_absolute(root))
}

/// Make an explicitly supplied root absolute.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let root = absolutize(root)?;
    Ok(canonical_or_absolute(&root))
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| Error::io(path, e))
}

/// Canonicalize without the Windows verbatim prefix, keeping the lexical
/// absolute path when the directory does not exist yet.
fn canonical_or_absolute(path: &Path) -> PathBuf {
    match dunce::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Root not canonicalizable, using absolute path");
            path.to_path_buf()
        }
    }
}
