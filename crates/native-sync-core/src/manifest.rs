//! Declarative description of what gets synced where.

use std::path::{Path, PathBuf};

use crate::path::RelativePath;

/// Tauri project directory that owns the native library.
pub const BUILD_DIR: &str = "src-tauri";

/// Resource folder name of the native library.
pub const LIB_NAME: &str = "onnxruntime";

/// File name of the native library.
pub const LIB_FILE: &str = "onnxruntime.dll";

/// The canonical source and its ordered list of mirror targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncManifest {
    pub source: RelativePath,
    pub targets: Vec<RelativePath>,
}

impl SyncManifest {
    pub fn new(source: impl Into<RelativePath>, targets: Vec<RelativePath>) -> Self {
        Self {
            source: source.into(),
            targets,
        }
    }

    /// The built-in manifest for the ONNX Runtime DLL.
    ///
    /// The source lives under `resources/` and is mirrored next to the
    /// Tauri project, into both cargo profile directories, and into the
    /// bundled resource folders of both profiles.
    pub fn onnxruntime() -> Self {
        let build = RelativePath::parse(BUILD_DIR);
        let resource = format!("resources/{LIB_NAME}/{LIB_FILE}");

        let targets = vec![
            build.join(LIB_FILE),
            build.join("target/debug").join(LIB_FILE),
            build.join("target/release").join(LIB_FILE),
            build.join("target/debug").join(&resource),
            build.join("target/release").join(&resource),
        ];

        Self {
            source: build.join(&resource),
            targets,
        }
    }

    /// Absolute location of the canonical source under `root`.
    pub fn source_path(&self, root: &Path) -> PathBuf {
        self.source.resolve(root)
    }

    /// Absolute target locations under `root`, in declared order.
    pub fn target_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.targets.iter().map(|t| t.resolve(root)).collect()
    }
}

impl Default for SyncManifest {
    fn default() -> Self {
        Self::onnxruntime()
    }
}
