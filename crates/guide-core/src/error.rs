//! Error types for the Campaign Guide

use thiserror::Error;

use crate::types::RecordKind;

/// Main error type for Campaign Guide operations
#[derive(Error, Debug)]
pub enum GuideError {
    /// No record with the given key exists in the collection
    #[error("{kind} not found: {key}")]
    RecordNotFound { kind: RecordKind, key: String },

    /// Two records in the same collection share a key
    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey { kind: RecordKind, key: String },

    /// A record key that cannot appear in a route
    #[error("Invalid {kind} key {key:?}: keys must be non-empty without '/', '#', '?', '%' or whitespace")]
    InvalidKey { kind: RecordKind, key: String },

    /// A hash route could not be understood
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Campaign or config JSON failed to parse
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is present but unusable
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using GuideError
pub type GuideResult<T> = Result<T, GuideError>;
