//! Path resolution for the config file and the store.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config, StockConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking `STOCK_CONFIG` first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if there is one.
///
/// A missing file is not an error: every setting has a default. A file that
/// exists but does not parse is.
pub fn load_config(path: &Path) -> anyhow::Result<Option<StockConfig>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file");
        return Ok(None);
    }
    read_config(path).map(Some)
}

/// Resolve the store path: `--store`/`STOCK_STORE`, then config, then the
/// default under the XDG data directory.
pub fn resolve_store_path(cli: &Cli, config: Option<&StockConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.store.path));
    }
    default_store_path()
}
