//! CLI error types for structured error handling.
//!
//! Errors that reach `main` are mapped to exit codes here, whether they were
//! raised by the CLI itself or bubbled up from `stock_core`.

use std::fmt;

use stock_core::StockError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (entry, config, etc.)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error returned from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(core) = cause.downcast_ref::<StockError>() {
            return match core {
                StockError::Validation(_) => exit_codes::INVALID_INPUT,
                StockError::Storage(_) => exit_codes::STORAGE_FAILED,
            };
        }
    }
    exit_codes::GENERAL
}

/// Split an error message into its first line and an optional `Hint:` line.
pub fn split_hint(message: &str) -> (&str, Option<&str>) {
    match message.find("\nHint:") {
        Some(idx) => (&message[..idx], Some(message[idx + 1..].trim_start_matches("Hint:").trim())),
        None => (message, None),
    }
}
