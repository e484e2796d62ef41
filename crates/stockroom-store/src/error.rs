//! # Store Error Types
//!
//! Error types for snapshot file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in console app)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Menu prints "Error: ..." and keeps running                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Snapshot file errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or renaming the file failed.
    ///
    /// ## When This Occurs
    /// - Parent directory cannot be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid snapshot.
    ///
    /// ## When This Occurs
    /// - File was edited by hand and is no longer valid JSON
    /// - File holds records of a different shape
    #[error("Invalid snapshot in {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configured path cannot name a file.
    #[error("Snapshot path is not a file: {0}")]
    InvalidPath(PathBuf),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
