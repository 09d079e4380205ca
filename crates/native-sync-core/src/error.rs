//! Error types for native-sync-core

use std::path::PathBuf;

/// Result type for native-sync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while syncing a native library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing canonical DLL at {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not discover sync root: {message}")]
    RootDiscovery { message: String },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn root_discovery(message: impl Into<String>) -> Self {
        Self::RootDiscovery {
            message: message.into(),
        }
    }

    /// Whether this error is the missing-source precondition failure.
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Self::MissingSource { .. })
    }
}
