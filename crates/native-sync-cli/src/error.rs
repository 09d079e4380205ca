//! Error types for native-sync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from native-sync-core
    #[error(transparent)]
    Core(#[from] native_sync_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the run failed because the canonical DLL is absent.
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_missing_source())
    }
}
