//! Error types for the catalog crate.
//!
//! Loading can fail on I/O, on malformed JSON, or when the records break
//! catalog-level rules (unique, non-empty ids). Scoring never fails; bad
//! per-field data is absorbed by the engine instead of surfacing here.

use thiserror::Error;

/// Errors that can occur while loading or indexing a college catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document was not valid JSON or did not match the expected shape
    #[error("Invalid JSON in {document}: {source}")]
    JsonError {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share the same id
    #[error("Duplicate college id: {id}")]
    DuplicateId { id: String },

    /// A required field was empty
    #[error("Missing {field} for record at position {position}")]
    MissingField { field: String, position: usize },

    /// A field held a value outside its documented range
    #[error("Invalid value for {field} on college {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
