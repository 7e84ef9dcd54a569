//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so they never mix with command output.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Pick the filter directive: `--verbose`, then `STOCK_LOG`, then `RUST_LOG`.
fn directive(verbose: bool, stock_log: Option<String>, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    stock_log
        .into_iter()
        .chain(rust_log)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Initialize logging for the process. Later calls are no-ops.
pub fn init(verbose: bool) {
    let wanted = directive(
        verbose,
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let filter = EnvFilter::try_new(&wanted).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
