//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, NOTHING, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge, RULE, TITLE_SEPARATOR};

/// Render a header line for a command.
///
/// Pretty mode: "Stock · command (context)"
/// Plain mode: "stock command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Stock", styles::bold(), ctx.color);
            let separator = TITLE_SEPARATOR.get(ctx.unicode);
            match context {
                Some(c) => format!("{} {} {} ({})", title, separator, command, c),
                None => format!("{} {} {}", title, separator, command),
            }
        }
        OutputMode::Plain => format!("stock {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() {
        RULE.get(ctx.unicode).repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render the block printed after a mutation.
///
/// Pretty mode: badge followed by indented key-value pairs
/// Plain mode: `status=ok` followed by `key=value` lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align: Align,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align: Align::Left,
        }
    }

    /// Right-aligned column, for numbers.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            align: Align::Right,
        }
    }
}

fn build_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>], bordered: bool) -> String {
    let mut table = ComfyTable::new();
    if !bordered {
        table.load_preset(NOTHING);
    } else if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(if bordered {
                    Attribute::Bold
                } else {
                    Attribute::Dim
                })
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    for (i, col) in columns.iter().enumerate() {
        if let Some(column) = table.column_mut(i) {
            if !bordered {
                column.set_padding((0, 2));
            }
            if col.align == Align::Right {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    table.to_string()
}

fn plain_rows(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a bordered table (used for the summary report).
///
/// Plain mode: tab-separated values, no header
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        build_table(ctx, columns, rows, true)
    } else {
        plain_rows(rows)
    }
}

/// Render a table without borders (used for ledger listings).
///
/// Plain mode: tab-separated values, no header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        build_table(ctx, columns, rows, false)
    } else {
        plain_rows(rows)
    }
}

/// Print a message unless the output mode is JSON.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() && !message.is_empty() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain and JSON modes: "error=message" with optional "hint=..."
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
