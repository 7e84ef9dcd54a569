use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stock_core::fs::write_atomic;

use crate::constants::DEFAULT_STORE_FILE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockConfig {
    pub store: StoreSection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UiSection {
    /// IANA zone used for entry timestamps; system local time when unset.
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExportSection {
    /// Directory for exports written without `--output`.
    pub directory: Option<String>,
}

impl StockConfig {
    pub fn new(store_path: &Path, timezone: Option<String>, export_dir: Option<String>) -> Self {
        Self {
            store: StoreSection {
                path: store_path.to_string_lossy().to_string(),
            },
            ui: UiSection { timezone },
            export: ExportSection {
                directory: export_dir,
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DEFAULT_STORE_FILE))
}

pub fn read_config(path: &Path) -> anyhow::Result<StockConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &StockConfig) -> anyhow::Result<()> {
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    write_atomic(path, contents.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("stock"));
        }
    }
    Ok(home_dir()?.join(".config").join("stock"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("stock"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("stock"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
