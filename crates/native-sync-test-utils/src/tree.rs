//! [`SyncTree`] builder for sync-root test scenarios.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use crate::layout;

/// A temporary sync root with helpers for seeding files and asserting on
/// their contents and timestamps. Paths are relative to the root.
///
/// # Example
///
/// ```rust,no_run
/// use native_sync_test_utils::SyncTree;
///
/// let tree = SyncTree::with_source();
/// tree.write("src-tauri/onnxruntime.dll", b"old");
/// tree.assert_file_exists("src-tauri/onnxruntime.dll");
/// ```
pub struct SyncTree {
    temp_dir: TempDir,
}

impl Default for SyncTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncTree {
    /// Create an empty temporary root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a root with the canonical DLL in place.
    pub fn with_source() -> Self {
        let tree = Self::new();
        tree.write(layout::SOURCE, layout::PAYLOAD);
        tree
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path for `rel`.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` at `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &[u8]) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    /// Read the bytes at `rel`.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, rel: &str) -> Vec<u8> {
        let path = self.path(rel);
        fs::read(&path).unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Set the modification time of `rel`.
    pub fn set_mtime(&self, rel: &str, time: SystemTime) {
        File::options()
            .write(true)
            .open(self.path(rel))
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    /// Move the modification time of `rel` back by `age`.
    pub fn age(&self, rel: &str, age: Duration) {
        let current = self.mtime(rel);
        self.set_mtime(rel, current - age);
    }

    pub fn mtime(&self, rel: &str) -> SystemTime {
        fs::metadata(self.path(rel)).unwrap().modified().unwrap()
    }

    /// Assert that `rel` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` is a byte-identical copy of the canonical DLL.
    ///
    /// # Panics
    /// Panics if either file cannot be read or the bytes differ.
    pub fn assert_matches_source(&self, rel: &str) {
        assert_eq!(
            self.read(rel),
            self.read(layout::SOURCE),
            "Expected {} to match the canonical DLL",
            rel
        );
    }
}
