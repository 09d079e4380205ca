//! Filesystem operations used by the runner

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Create every missing directory above `target`.
///
/// Succeeds without doing anything when the chain already exists.
pub fn ensure_parent_dir(target: &Path) -> Result<()> {
    let Some(parent) = target.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }

    tracing::debug!(dir = %parent.display(), "Creating directory");
    fs::create_dir_all(parent).map_err(|e| Error::CreateDir {
        path: parent.to_path_buf(),
        source: e,
    })
}

/// Copy `source` over `target`, replacing existing content.
///
/// Returns the number of bytes copied.
pub fn copy_file(source: &Path, target: &Path) -> Result<u64> {
    fs::copy(source, target).map_err(|e| Error::Copy {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_parent_dir_creates_deep_chain() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/c/d/e/lib.dll");

        ensure_parent_dir(&target).unwrap();

        assert!(temp.path().join("a/b/c/d/e").is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn ensure_parent_dir_is_noop_when_present() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("lib.dll");
        ensure_parent_dir(&target).unwrap();
        ensure_parent_dir(&target).unwrap();
    }

    #[test]
    fn ensure_parent_dir_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blocker"), b"file").unwrap();
        let target = temp.path().join("blocker/inner/lib.dll");

        let err = ensure_parent_dir(&target).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
        assert!(err.to_string().contains("blocker"));
    }

    #[test]
    fn copy_file_overwrites_target() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src.dll");
        let target = temp.path().join("dst.dll");
        fs::write(&source, b"new bytes").unwrap();
        fs::write(&target, b"old").unwrap();

        let copied = copy_file(&source, &target).unwrap();

        assert_eq!(copied, 9);
        assert_eq!(fs::read(&target).unwrap(), b"new bytes");
    }

    #[test]
    fn copy_file_reports_both_paths_on_failure() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("missing.dll");
        let target = temp.path().join("dst.dll");

        let err = copy_file(&source, &target).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing.dll"));
        assert!(message.contains("dst.dll"));
    }
}
