//! Shared test utilities for the native-sync workspace.
//!
//! This crate provides standardised sync-root fixtures so the core and CLI
//! test suites build the same directory trees. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`tree`] — [`SyncTree`] builder for temporary sync roots
//! - [`layout`] — the ONNX Runtime source and target paths as plain strings

pub mod layout;
pub mod tree;

pub use tree::SyncTree;
