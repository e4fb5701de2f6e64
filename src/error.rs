//! Error types for dictionary loading and persistence
//!
//! None of these are fatal: callers log them and fall back to defaults.

use thiserror::Error;

/// Dictionary loading errors
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Word list could not be read
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// Word list is not a JSON array of strings
    #[error("Malformed word list: {0}")]
    Json(#[from] serde_json::Error),

    /// Word list parsed but contained no usable words
    #[error("Word list is empty")]
    Empty,
}

/// Storage errors
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Filesystem error (native storage)
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value is not valid JSON for the expected type
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backing store is not available on this platform/session
    #[error("Storage unavailable: {reason}")]
    Unavailable {
        /// Why the store could not be reached
        reason: String,
    },
}
