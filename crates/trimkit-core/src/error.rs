//! Error types for Trimkit.

use thiserror::Error;

/// Main error type for Trimkit operations.
#[derive(Error, Debug)]
pub enum TrimkitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// Result type alias for Trimkit operations.
pub type Result<T> = std::result::Result<T, TrimkitError>;
