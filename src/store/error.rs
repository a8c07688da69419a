//! Store error type.

use crate::infra::{Fingerprint, ParseError};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The import document could not be parsed; nothing was ingested.
    #[error("malformed import: {0}")]
    MalformedImport(#[from] ParseError),

    /// A file with this fingerprint has already been ingested.
    #[error("file already ingested (fingerprint {fingerprint})")]
    DuplicateFingerprint { fingerprint: Fingerprint },

    /// A snapshot blob could not be decoded into a valid store.
    #[error("corrupt store snapshot: {reason}")]
    CorruptStore { reason: String },

    /// Snapshot encoding failed.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StoreError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        StoreError::CorruptStore {
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
