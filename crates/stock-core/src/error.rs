//! Error types for Stock core operations.
//!
//! Validation failures are the only errors produced by user input. Storage
//! errors surface write failures of the backing store; read failures never
//! reach this type because malformed persisted data degrades to an empty
//! ledger.

use thiserror::Error;

/// Result type alias for Stock operations.
pub type Result<T> = std::result::Result<T, StockError>;

/// Core error type for Stock operations.
#[derive(Debug, Error)]
pub enum StockError {
    /// Rejected user input (quantity below minimum, empty product, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StockError {
    /// Build a validation error from a human-readable reason.
    pub fn validation(reason: impl Into<String>) -> Self {
        StockError::Validation(reason.into())
    }

    /// The human-readable reason without the error-kind prefix.
    pub fn reason(&self) -> &str {
        match self {
            StockError::Validation(msg) | StockError::Storage(msg) => msg,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StockError::Validation(_))
    }
}

impl From<std::io::Error> for StockError {
    fn from(err: std::io::Error) -> Self {
        StockError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for StockError {
    fn from(err: rusqlite::Error) -> Self {
        StockError::Storage(format!("SQLite error: {}", err))
    }
}

impl From<serde_json::Error> for StockError {
    fn from(err: serde_json::Error) -> Self {
        StockError::Storage(format!("JSON error: {}", err))
    }
}
