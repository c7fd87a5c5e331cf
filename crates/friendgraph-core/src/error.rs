//! Error types for friendgraph-core.

use thiserror::Error;

/// Error type for graph construction, queries and network loading.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A name was referenced before being registered with `add_user`.
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// `add_user` was called with a name that is already registered.
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// A user cannot be connected to themselves.
    #[error("User cannot be connected to themselves: {0}")]
    SelfConnection(String),

    /// Malformed field in a network description.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Network file extension is not one we can read.
    #[error("Unsupported network format: {0}")]
    UnsupportedFormat(String),

    /// Malformed environment override.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for friendgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
