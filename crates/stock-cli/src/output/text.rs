//! Table rows for the ledgers and the summary.

use stock_core::rounding::{format_money, format_quantity};
use stock_core::{InventoryEntry, OrderEntry, SummaryRow, SummaryTotals};

use crate::ui::{kv, or_dash, short_id, single_line, truncate, Column, UiContext};

const MAX_TEXT_WIDTH: usize = 32;

pub const INVENTORY_COLUMNS: [Column; 4] = [
    Column::new("ID"),
    Column::new("Product"),
    Column::numeric("Quantity"),
    Column::new("Time"),
];

pub const ORDER_COLUMNS: [Column; 8] = [
    Column::new("ID"),
    Column::new("Customer"),
    Column::new("Phone"),
    Column::new("Product"),
    Column::numeric("Price"),
    Column::numeric("Qty"),
    Column::numeric("Total"),
    Column::new("Time"),
];

pub const SUMMARY_COLUMNS: [Column; 4] = [
    Column::new("Product"),
    Column::numeric("Received"),
    Column::numeric("Ordered"),
    Column::numeric("Remaining"),
];

fn cell(ctx: &UiContext, text: &str) -> String {
    let text = single_line(text);
    if ctx.mode.is_pretty() {
        truncate(&text, MAX_TEXT_WIDTH)
    } else {
        text
    }
}

/// Ids are shortened in pretty mode and kept whole in plain mode, where they
/// are meant to be piped into `remove`.
fn id_cell(ctx: &UiContext, id: &uuid::Uuid) -> String {
    if ctx.mode.is_pretty() {
        short_id(id)
    } else {
        id.to_string()
    }
}

pub fn inventory_rows(ctx: &UiContext, entries: &[InventoryEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| {
            vec![
                id_cell(ctx, &e.id),
                cell(ctx, &e.product),
                format_quantity(e.quantity),
                e.timestamp.clone(),
            ]
        })
        .collect()
}

pub fn order_rows(ctx: &UiContext, orders: &[OrderEntry]) -> Vec<Vec<String>> {
    orders
        .iter()
        .map(|o| {
            vec![
                id_cell(ctx, &o.id),
                cell(ctx, or_dash(&o.customer_name)),
                cell(ctx, or_dash(&o.customer_phone)),
                cell(ctx, &o.product),
                format_money(o.unit_price),
                format_quantity(o.quantity),
                format_money(o.total),
                o.timestamp.clone(),
            ]
        })
        .collect()
}

pub fn summary_rows(ctx: &UiContext, rows: &[SummaryRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            vec![
                cell(ctx, &r.product),
                format_quantity(r.total_received),
                format_quantity(r.total_ordered),
                format_quantity(r.remaining),
            ]
        })
        .collect()
}

/// Footer lines under the summary table.
pub fn totals_lines(ctx: &UiContext, totals: &SummaryTotals) -> Vec<String> {
    vec![
        kv(ctx, "Products", &totals.products.to_string()),
        kv(ctx, "Received", &format_quantity(totals.received)),
        kv(ctx, "Ordered", &format_quantity(totals.ordered)),
        kv(ctx, "Remaining", &format_quantity(totals.remaining)),
        kv(ctx, "Revenue", &format_money(totals.revenue)),
    ]
}
