//! Application context for the stock CLI.
//!
//! Bundles the parsed arguments with the lazily loaded config so handlers
//! take one parameter.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use stock_core::{SqliteStore, StockBook};

use crate::cli::Cli;
use crate::config::StockConfig;
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

use super::clock::{parse_timezone, ZonedClock};
use super::resolver::{load_config, resolve_config_path, resolve_store_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<StockConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file contents, loaded on first use.
    pub fn config(&self) -> anyhow::Result<Option<&StockConfig>> {
        let loaded = self
            .config
            .get_or_try_init(|| load_config(&resolve_config_path()?))?;
        Ok(loaded.as_ref())
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    /// Directory for exports written without `--output`.
    pub fn export_dir(&self) -> anyhow::Result<Option<PathBuf>> {
        Ok(self
            .config()?
            .and_then(|c| c.export.directory.as_deref())
            .map(PathBuf::from))
    }

    /// Open the store and load both ledgers, stamping new entries in the
    /// configured timezone when there is one.
    pub fn open_book(&self) -> anyhow::Result<StockBook<SqliteStore>> {
        let path = self.store_path()?;
        tracing::debug!(path = %path.display(), "opening store");
        let store = SqliteStore::open(&path)?;
        let book = StockBook::open(store);

        let timezone = self.config()?.and_then(|c| c.ui.timezone.as_deref());
        match timezone.map(parse_timezone).transpose()?.flatten() {
            Some(tz) => Ok(book.with_clock(ZonedClock::new(tz))),
            None => Ok(book),
        }
    }

    /// UI context for a command that accepts `--format`.
    pub fn ui_context(&self, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(self.cli.json, format, self.cli.no_color, self.cli.ascii)
    }
}
