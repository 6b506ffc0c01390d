//! Error types for document decoding.
//!
//! These errors never reach the rendering path: [`crate::document::parse`]
//! turns them into an empty item list and a diagnostic. They are exposed so
//! that tests and tooling can inspect why a document was rejected.

/// Errors that can occur while decoding a todo document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The document is not valid JSON, or does not match the item schema.
    #[error("failed to decode todo document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A specialized Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
