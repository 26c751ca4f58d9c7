//! Persistence error types.
//!
//! Store operations never panic on bad data or failed I/O. Every outcome is
//! reported as a [`StoreError`] the caller must check; nothing is retried.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a key-value medium.
#[derive(Debug, Error)]
pub enum MediumError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to replace {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the medium.
    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    /// The blocking I/O task panicked or was cancelled.
    #[error("Storage task did not complete")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },

    /// Medium-specific failure with no underlying error value.
    #[error("{0}")]
    Unavailable(String),
}

/// Kind of record an operation referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Workout,
    Exercise,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workout => f.write_str("Workout"),
            Self::Exercise => f.write_str("Exercise"),
        }
    }
}

/// Workout store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The medium could not be read or written, or the stored collection
    /// could not be decoded or encoded.
    #[error("Storage unavailable: failed to {operation} '{key}'")]
    StorageUnavailable {
        operation: &'static str,
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Referenced record does not exist at mutation time.
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    /// Set index is past the end of the exercise's sets.
    #[error("Set index {index} is out of range (exercise has {len} sets)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl StoreError {
    pub(crate) fn unavailable(
        operation: &'static str,
        key: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::StorageUnavailable {
            operation,
            key: key.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn not_found(entity: Entity, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// True for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::StorageUnavailable {
                operation: "decode",
                ..
            } => "Your saved workouts could not be read. The stored data may be corrupted."
                .to_string(),
            Self::StorageUnavailable {
                operation: "encode",
                source,
                ..
            } => format!("Your changes were not saved: {source}."),
            Self::StorageUnavailable { operation, .. } => {
                format!("Could not {operation} your saved workouts.")
            }
            Self::NotFound { entity, id } => {
                format!("{entity} '{id}' no longer exists. It may have been deleted.")
            }
            Self::IndexOutOfRange { index, len } => {
                format!(
                    "Set {} does not exist; this exercise has {} set(s).",
                    index + 1,
                    len
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::StorageUnavailable {
                operation: "decode",
                ..
            } => Some(
                "Your data has been left untouched. Restore a backup of the data file or \
                 inspect it by hand."
                    .into(),
            ),
            Self::StorageUnavailable {
                operation: "encode",
                ..
            } => Some("Weights must be finite and not negative. Your saved data is unchanged.".into()),
            Self::StorageUnavailable { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the data directory exists and is readable.".into())
                } else {
                    Some("Check disk space and write permission for the data directory.".into())
                }
            }
            Self::NotFound { .. } => Some("Reload the workout list and try again.".into()),
            Self::IndexOutOfRange { .. } => {
                Some("Reload the workout; set positions shift after a deletion.".into())
            }
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
