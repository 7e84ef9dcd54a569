use std::io::Write;
use std::path::{Path, PathBuf};

use stock_core::fs::write_atomic;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::export::{default_file_name, render, ExportFormat, ExportSource, ExportTarget};
use crate::output::print_json;
use crate::ui::{print, receipt};

/// Where an export goes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

fn resolve_destination(
    output: Option<&Path>,
    export_dir: Option<&Path>,
    target: ExportTarget,
    format: ExportFormat,
) -> Destination {
    let file_name = default_file_name(target, format);
    match output {
        Some(path) if path.as_os_str() == "-" => Destination::Stdout,
        Some(path) if path.is_dir() => Destination::File(path.join(file_name)),
        Some(path) => Destination::File(path.to_path_buf()),
        None => Destination::File(export_dir.unwrap_or_else(|| Path::new(".")).join(file_name)),
    }
}

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let mut book = ctx.open_book()?;
    let summary = match args.target {
        ExportTarget::Summary => book.summary(),
        _ => Vec::new(),
    };
    let source = ExportSource {
        inventory: book.inventory_entries(),
        orders: book.order_entries(),
        summary: &summary,
    };
    let records = match args.target {
        ExportTarget::Inventory => source.inventory.len(),
        ExportTarget::Orders => source.orders.len(),
        ExportTarget::Summary => source.summary.len(),
    };
    let bytes = render(args.target, args.format, &source)?;

    let export_dir = ctx.export_dir()?;
    let path = match resolve_destination(
        args.output.as_deref(),
        export_dir.as_deref(),
        args.target,
        args.format,
    ) {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
            return Ok(());
        }
        Destination::File(path) => path,
    };

    write_atomic(&path, &bytes)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), records, "wrote export");

    let ui = ctx.ui_context(None);
    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "status": "exported",
            "path": path.display().to_string(),
            "format": args.format.extension(),
            "records": records,
        }));
    }
    if !ctx.quiet() {
        print(
            &ui,
            &receipt(
                &ui,
                &format!("Exported {}", args.target.title()),
                &[
                    ("Path", path.display().to_string()),
                    ("Records", records.to_string()),
                ],
            ),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_dash_goes_to_stdout() {
        let dest = resolve_destination(
            Some(Path::new("-")),
            None,
            ExportTarget::Orders,
            ExportFormat::Csv,
        );
        assert_eq!(dest, Destination::Stdout);
    }

    #[test]
    fn test_directory_output_uses_default_name() {
        let dir = tempdir().unwrap();
        let dest = resolve_destination(
            Some(dir.path()),
            None,
            ExportTarget::Inventory,
            ExportFormat::Text,
        );
        assert_eq!(dest, Destination::File(dir.path().join("Inventory_Data.txt")));
    }

    #[test]
    fn test_explicit_file_is_kept() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("out.csv");
        let dest = resolve_destination(
            Some(&file),
            None,
            ExportTarget::Summary,
            ExportFormat::Json,
        );
        assert_eq!(dest, Destination::File(file));
    }

    #[test]
    fn test_missing_output_uses_export_dir_or_cwd() {
        let dir = tempdir().unwrap();
        assert_eq!(
            resolve_destination(None, Some(dir.path()), ExportTarget::Orders, ExportFormat::Csv),
            Destination::File(dir.path().join("CustomerOrders.csv"))
        );
        assert_eq!(
            resolve_destination(None, None, ExportTarget::Summary, ExportFormat::Jsonl),
            Destination::File(PathBuf::from("./InventorySummary.jsonl"))
        );
    }
}
