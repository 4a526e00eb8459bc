//! Error types for the store.

use std::path::PathBuf;

use thiserror::Error;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading or saving session state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory could not be created.
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A save file could not be read or written.
    #[error("failed to access save file {path}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A save file held something other than a save document.
    #[error("save file {path} is corrupt: {source}")]
    Corrupt {
        /// The offending file.
        path: PathBuf,
        /// The decode error.
        source: serde_json::Error,
    },

    /// A save document could not be encoded.
    #[error("failed to encode save document: {0}")]
    Encode(#[from] serde_json::Error),
}
