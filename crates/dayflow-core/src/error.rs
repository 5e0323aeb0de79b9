//! Error types for the planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
///
/// The scheduling engine itself is a total function and never fails, and
/// invalid commands are rejected as no-ops rather than raised. Errors only
/// arise at the edges: writing the snapshot document and resolving its
/// filesystem location.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl PlannerError {
    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlannerError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
