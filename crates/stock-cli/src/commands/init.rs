use std::path::PathBuf;

use stock_core::SqliteStore;

use crate::app::{parse_timezone, resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, StockConfig};
use crate::errors::CliError;
use crate::output::print_json;
use crate::ui::{hint, print, receipt};

/// Expand a leading `~` to `$HOME`.
fn expand_tilde(input: &str) -> PathBuf {
    let Ok(home) = std::env::var("HOME") else {
        return PathBuf::from(input);
    };
    if input == "~" {
        return PathBuf::from(home);
    }
    match input.strip_prefix("~/") {
        Some(rest) => PathBuf::from(home).join(rest),
        None => PathBuf::from(input),
    }
}

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = match args.config_path.as_deref() {
        Some(path) => expand_tilde(path),
        None => resolve_config_path()?,
    };
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let store_path = match (args.path.as_deref(), ctx.cli().store.as_deref()) {
        (Some(path), _) => expand_tilde(path),
        (None, Some(path)) => expand_tilde(path),
        (None, None) => default_store_path()?,
    };

    let timezone = match args.timezone.as_deref() {
        Some(value) => parse_timezone(value)?.map(|tz| tz.to_string()),
        None => None,
    };
    let export_dir = args
        .export_dir
        .as_deref()
        .map(|dir| expand_tilde(dir).to_string_lossy().to_string());

    let store = SqliteStore::open(&store_path)?;
    store.check_integrity()?;
    tracing::debug!(path = %store_path.display(), "store ready");

    let config = StockConfig::new(&store_path, timezone.clone(), export_dir.clone());
    write_config(&config_path, &config)?;

    let ui = ctx.ui_context(None);
    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "status": "initialized",
            "config": config_path.display().to_string(),
            "store": store_path.display().to_string(),
            "timezone": timezone,
            "export_dir": export_dir,
        }));
    }
    if ctx.quiet() {
        return Ok(());
    }
    print(
        &ui,
        &receipt(
            &ui,
            "Initialized stock book",
            &[
                ("Config", config_path.display().to_string()),
                ("Store", store_path.display().to_string()),
                ("Timezone", timezone.unwrap_or_else(|| "auto".to_string())),
            ],
        ),
    );
    print(&ui, &hint(&ui, "Record stock with `stock inventory add <PRODUCT> <QTY>`."));
    Ok(())
}
