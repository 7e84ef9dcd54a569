//! File exports of the ledgers and the summary.
//!
//! Spreadsheet (CSV) and text exports carry the same columns as the tables
//! shown on screen. JSON and JSONL exports carry the full records, ids
//! included, with the same field names the store uses.

use clap::ValueEnum;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, Table};
use serde::Serialize;
use stock_core::rounding::{format_money, format_quantity};
use stock_core::{InventoryEntry, OrderEntry, SummaryRow};

/// Which data set to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Inventory,
    Orders,
    Summary,
}

impl ExportTarget {
    /// Report title, also used to name text exports.
    pub fn title(self) -> &'static str {
        match self {
            ExportTarget::Inventory => "Inventory Data",
            ExportTarget::Orders => "Customer Orders",
            ExportTarget::Summary => "Inventory Summary",
        }
    }

    /// Base file name for spreadsheet and data exports.
    pub fn file_stem(self) -> &'static str {
        match self {
            ExportTarget::Inventory => "InventoryData",
            ExportTarget::Orders => "CustomerOrders",
            ExportTarget::Summary => "InventorySummary",
        }
    }
}

/// Output file format.
///
/// CSV is the spreadsheet export and the text report is the printable one;
/// both carry the columns shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Spreadsheet (comma-separated, opens in Excel or LibreOffice)
    Csv,
    /// Full records as one JSON array
    Json,
    /// Full records, one JSON object per line
    Jsonl,
    /// Printable report with a title and a boxed table
    Text,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
            ExportFormat::Text => "txt",
        }
    }
}

/// File name used when no output path is given.
///
/// Text reports are named after their title ("Inventory_Data.txt"), every
/// other format after the data set ("InventoryData.csv").
pub fn default_file_name(target: ExportTarget, format: ExportFormat) -> String {
    let stem = match format {
        ExportFormat::Text => target.title().replace(' ', "_"),
        _ => target.file_stem().to_string(),
    };
    format!("{}.{}", stem, format.extension())
}

/// Snapshot of everything an export can draw from.
pub struct ExportSource<'a> {
    pub inventory: &'a [InventoryEntry],
    pub orders: &'a [OrderEntry],
    pub summary: &'a [SummaryRow],
}

/// Tabular view of one data set: what the spreadsheet and text exports write.
struct Sheet {
    title: &'static str,
    headers: &'static [&'static str],
    numeric: &'static [usize],
    rows: Vec<Vec<String>>,
}

fn sheet(target: ExportTarget, source: &ExportSource<'_>) -> Sheet {
    match target {
        ExportTarget::Inventory => Sheet {
            title: target.title(),
            headers: &["Product", "Quantity", "Time"],
            numeric: &[1],
            rows: source
                .inventory
                .iter()
                .map(|e| vec![e.product.clone(), format_quantity(e.quantity), e.timestamp.clone()])
                .collect(),
        },
        ExportTarget::Orders => Sheet {
            title: target.title(),
            headers: &["Name", "Phone", "Product", "Price", "Qty", "Total", "Time"],
            numeric: &[3, 4, 5],
            rows: source
                .orders
                .iter()
                .map(|o| {
                    vec![
                        o.customer_name.clone(),
                        o.customer_phone.clone(),
                        o.product.clone(),
                        format_money(o.unit_price),
                        format_quantity(o.quantity),
                        format_money(o.total),
                        o.timestamp.clone(),
                    ]
                })
                .collect(),
        },
        ExportTarget::Summary => Sheet {
            title: target.title(),
            headers: &["Product", "Total Received", "Total Ordered", "Remaining"],
            numeric: &[1, 2, 3],
            rows: source
                .summary
                .iter()
                .map(|r| {
                    vec![
                        r.product.clone(),
                        format_quantity(r.total_received),
                        format_quantity(r.total_ordered),
                        format_quantity(r.remaining),
                    ]
                })
                .collect(),
        },
    }
}

/// Render `target` in `format`.
pub fn render(
    target: ExportTarget,
    format: ExportFormat,
    source: &ExportSource<'_>,
) -> anyhow::Result<Vec<u8>> {
    match (format, target) {
        (ExportFormat::Csv, _) => to_csv(&sheet(target, source)),
        (ExportFormat::Text, _) => Ok(to_text(&sheet(target, source)).into_bytes()),
        (ExportFormat::Json, ExportTarget::Inventory) => to_json(source.inventory),
        (ExportFormat::Json, ExportTarget::Orders) => to_json(source.orders),
        (ExportFormat::Json, ExportTarget::Summary) => to_json(source.summary),
        (ExportFormat::Jsonl, ExportTarget::Inventory) => to_jsonl(source.inventory),
        (ExportFormat::Jsonl, ExportTarget::Orders) => to_jsonl(source.orders),
        (ExportFormat::Jsonl, ExportTarget::Summary) => to_jsonl(source.summary),
    }
}

fn to_csv(sheet: &Sheet) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(sheet.headers)?;
    for row in &sheet.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to finish CSV export: {}", e.error()))
}

fn to_text(sheet: &Sheet) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(sheet.headers.to_vec());
    for row in &sheet.rows {
        table.add_row(row);
    }
    for &index in sheet.numeric {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    format!(
        "{}\n{}\n\n{}\n",
        sheet.title,
        "=".repeat(sheet.title.len()),
        table
    )
}

fn to_json<T: Serialize>(records: &[T]) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(records)?;
    bytes.push(b'\n');
    Ok(bytes)
}

fn to_jsonl<T: Serialize>(records: &[T]) -> anyhow::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for record in records {
        serde_json::to_writer(&mut bytes, record)?;
        bytes.push(b'\n');
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn inventory() -> Vec<InventoryEntry> {
        vec![
            InventoryEntry {
                id: Uuid::new_v4(),
                product: "Apples, red".to_string(),
                quantity: 10.0,
                timestamp: "2024-03-01 09:30:00".to_string(),
            },
            InventoryEntry {
                id: Uuid::new_v4(),
                product: "Pears".to_string(),
                quantity: 0.25,
                timestamp: "2024-03-01 09:31:00".to_string(),
            },
        ]
    }

    fn orders() -> Vec<OrderEntry> {
        vec![OrderEntry {
            id: Uuid::new_v4(),
            customer_name: "Ana".to_string(),
            customer_phone: "555-0101".to_string(),
            product: "Pears".to_string(),
            unit_price: 2.5,
            quantity: 4.0,
            total: 10.0,
            timestamp: "2024-03-01 10:00:00".to_string(),
        }]
    }

    fn render_str(target: ExportTarget, format: ExportFormat) -> String {
        let inventory = inventory();
        let orders = orders();
        let summary = stock_core::compute(&inventory, &orders);
        let source = ExportSource {
            inventory: &inventory,
            orders: &orders,
            summary: &summary,
        };
        String::from_utf8(render(target, format, &source).unwrap()).unwrap()
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(
            default_file_name(ExportTarget::Inventory, ExportFormat::Csv),
            "InventoryData.csv"
        );
        assert_eq!(
            default_file_name(ExportTarget::Orders, ExportFormat::Jsonl),
            "CustomerOrders.jsonl"
        );
        assert_eq!(
            default_file_name(ExportTarget::Summary, ExportFormat::Text),
            "Inventory_Summary.txt"
        );
    }

    #[test]
    fn test_inventory_csv_quotes_and_formats() {
        let csv = render_str(ExportTarget::Inventory, ExportFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Product,Quantity,Time");
        assert_eq!(lines[1], "\"Apples, red\",10.000,2024-03-01 09:30:00");
        assert_eq!(lines[2], "Pears,0.250,2024-03-01 09:31:00");
    }

    #[test]
    fn test_orders_csv_columns() {
        let csv = render_str(ExportTarget::Orders, ExportFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Name,Phone,Product,Price,Qty,Total,Time");
        assert_eq!(lines[1], "Ana,555-0101,Pears,2.50,4.000,10.00,2024-03-01 10:00:00");
    }

    #[test]
    fn test_summary_csv_keeps_negative_remaining() {
        let csv = render_str(ExportTarget::Summary, ExportFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Product,Total Received,Total Ordered,Remaining");
        assert_eq!(lines[1], "\"Apples, red\",10.000,0.000,10.000");
        assert_eq!(lines[2], "Pears,0.250,4.000,-3.750");
    }

    #[test]
    fn test_json_uses_stored_field_names() {
        let json = render_str(ExportTarget::Orders, ExportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert_eq!(first["name"], "Ana");
        assert_eq!(first["qty"], 4.0);
        assert!(first["id"].is_string());
    }

    #[test]
    fn test_summary_json_is_camel_case() {
        let json = render_str(ExportTarget::Summary, ExportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["totalOrdered"], 4.0);
        assert_eq!(value[1]["remaining"], -3.75);
    }

    #[test]
    fn test_jsonl_one_record_per_line() {
        let jsonl = render_str(ExportTarget::Inventory, ExportFormat::Jsonl);
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("product").is_some());
        }
    }

    #[test]
    fn test_text_report_has_title_and_rows() {
        let text = render_str(ExportTarget::Inventory, ExportFormat::Text);
        assert!(text.starts_with("Inventory Data\n==============\n"));
        assert!(text.contains("Apples, red"));
        assert!(text.contains("10.000"));
        assert!(text.is_ascii());
    }

    #[test]
    fn test_empty_export_still_has_headers() {
        let source = ExportSource {
            inventory: &[],
            orders: &[],
            summary: &[],
        };
        let bytes = render(ExportTarget::Orders, ExportFormat::Csv, &source).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Name,Phone,Product,Price,Qty,Total,Time\n"
        );
        let json = render(ExportTarget::Orders, ExportFormat::Json, &source).unwrap();
        assert_eq!(String::from_utf8(json).unwrap(), "[]\n");
    }
}
