//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error
/// - 2: Usage error (reported by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    pub const GENERAL: i32 = 1;

    /// Entry or file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Rejected input: validation failure, bad id, missing confirmation.
    pub const INVALID_INPUT: i32 = 4;

    /// The store could not be read or written.
    pub const STORAGE_FAILED: i32 = 5;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "STOCK_CONFIG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STOCK_LOG";

/// File name of the default store under the data directory.
pub const DEFAULT_STORE_FILE: &str = "stock.db";
