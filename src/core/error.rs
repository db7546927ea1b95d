//! Error types and error handling for the sift search engine.
//!
//! Every expected failure of the engine (rejected document, malformed
//! query, unknown document) is a variant of [`SiftError`]. The engine never
//! panics on bad input; callers decide how to surface these errors.

use crate::core::types::DocumentId;
use thiserror::Error;

/// Result type alias for sift operations
pub type Result<T> = std::result::Result<T, SiftError>;

/// Main error type for the sift engine
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Invalid document id: {0} (ids must be non-negative)")]
    InvalidDocumentId(DocumentId),

    #[error("Document already exists: {0}")]
    DuplicateDocumentId(DocumentId),

    #[error("Invalid document text for id {id}: {reason}")]
    InvalidDocumentText { id: DocumentId, reason: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Corpus error at line {line}: {message}")]
    CorpusError { line: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SiftError {
    /// Check if this error came from a rejected `add_document` call
    pub fn is_rejected_document(&self) -> bool {
        matches!(
            self,
            SiftError::InvalidDocumentId(_)
                | SiftError::DuplicateDocumentId(_)
                | SiftError::InvalidDocumentText { .. }
        )
    }
}
