//! Store error types for vocab-store.

use std::path::PathBuf;

use thiserror::Error;
use vocab_core::errors::CoreError;

/// Errors from record storage and the workflows built on it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record file could not be decoded into an entry.
    #[error("Malformed record {}: {reason}", .path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    /// Creation target already exists; the existing record was left untouched.
    #[error("Entry '{name}' already exists at {}", .path.display())]
    NamingConflict { name: String, path: PathBuf },

    /// No record matches the name in any category.
    #[error("Entry not found: {name}")]
    NotFound { name: String },

    /// Filesystem access failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry could not be encoded as YAML.
    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_yaml::Error),

    /// Creation input was rejected before any write.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
