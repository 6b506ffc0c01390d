//! Error types for shared store access.
//!
//! None of these reach the rendering path. [`crate::read_or_absent`] logs them
//! and treats the value as absent.

use std::path::PathBuf;

/// Errors that can occur while reading the shared store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("failed to read shared store at {path}: {source}")]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object.
    #[error("shared store at {path} is corrupt: {source}")]
    Corrupt {
        /// The path of the corrupt file.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The group identifier cannot name a store.
    #[error("invalid group identifier: {0:?}")]
    InvalidGroup(String),

    /// The platform data directory could not be determined.
    #[error("could not determine data directory")]
    NoDataDirectory,
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
