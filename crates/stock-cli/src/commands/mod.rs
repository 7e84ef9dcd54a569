//! Command handlers, one module per top-level command.

pub mod export;
pub mod init;
pub mod inventory;
mod ledger;
pub mod misc;
pub mod orders;
pub mod summary;

use crate::app::AppContext;
use crate::cli::DisplayArgs;
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::ui::UiContext;

/// UI context for a listing command, rejecting `--format` together with `--json`.
fn display_context(ctx: &AppContext, args: &DisplayArgs) -> anyhow::Result<UiContext> {
    let format = parse_output_format(args.format.as_deref())?;
    if ctx.cli().json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    Ok(ctx.ui_context(format))
}

fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "entry", "entries"), "0 entries");
        assert_eq!(count_label(1, "order", "orders"), "1 order");
        assert_eq!(count_label(3, "order", "orders"), "3 orders");
    }
}
