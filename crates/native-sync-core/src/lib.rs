//! Native library sync for Tauri build trees
//!
//! Keeps copies of a canonical native library (the ONNX Runtime DLL) in step
//! with the source under `src-tauri/resources/`, copying only stale targets.

pub mod error;
pub mod io;
pub mod manifest;
pub mod path;
pub mod root;
pub mod runner;
pub mod staleness;

pub use error::{Error, Result};
pub use manifest::SyncManifest;
pub use path::RelativePath;
pub use root::{discover_root, resolve_root};
pub use runner::{SyncReport, SyncRunner, TargetAction, TargetOutcome};
pub use staleness::{StaleReason, Staleness};
