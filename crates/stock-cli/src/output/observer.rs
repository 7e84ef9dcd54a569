//! Console render adapter for ledger events.

use stock_core::rounding::{format_money, format_quantity};
use stock_core::{EntryRef, LedgerKind, LedgerObserver, SummaryRow};
use uuid::Uuid;

use super::json::{cleared_json, print_json, removed_json};
use super::text::{summary_rows, SUMMARY_COLUMNS};
use crate::ui::{or_dash, print, receipt, table, UiContext};

/// Prints a receipt (or a JSON document) for every persisted mutation, and
/// the reconciliation table when a summary is computed.
pub struct ConsoleObserver {
    ui: UiContext,
    quiet: bool,
}

impl ConsoleObserver {
    pub fn new(ui: UiContext, quiet: bool) -> Self {
        Self { ui, quiet }
    }

    fn emit_json(&self, value: &serde_json::Value) {
        if let Err(err) = print_json(value) {
            tracing::warn!(error = %err, "failed to render JSON output");
        }
    }

    fn emit_receipt(&self, title: &str, items: &[(&str, String)]) {
        if !self.quiet {
            print(&self.ui, &receipt(&self.ui, title, items));
        }
    }
}

fn added_title(kind: LedgerKind) -> &'static str {
    match kind {
        LedgerKind::Inventory => "Added inventory entry",
        LedgerKind::Orders => "Added order",
    }
}

impl LedgerObserver for ConsoleObserver {
    fn on_entry_added(&mut self, entry: EntryRef<'_>) {
        if self.ui.mode.is_json() {
            let value = match entry {
                EntryRef::Inventory(e) => serde_json::to_value(e),
                EntryRef::Order(o) => serde_json::to_value(o),
            };
            match value {
                Ok(value) => self.emit_json(&value),
                Err(err) => tracing::warn!(error = %err, "failed to serialize entry"),
            }
            return;
        }

        let items = match entry {
            EntryRef::Inventory(e) => vec![
                ("ID", e.id.to_string()),
                ("Product", e.product.clone()),
                ("Quantity", format_quantity(e.quantity)),
                ("Time", e.timestamp.clone()),
            ],
            EntryRef::Order(o) => vec![
                ("ID", o.id.to_string()),
                ("Customer", or_dash(&o.customer_name).to_string()),
                ("Phone", or_dash(&o.customer_phone).to_string()),
                ("Product", o.product.clone()),
                ("Price", format_money(o.unit_price)),
                ("Quantity", format_quantity(o.quantity)),
                ("Total", format_money(o.total)),
                ("Time", o.timestamp.clone()),
            ],
        };
        self.emit_receipt(added_title(entry.kind()), &items);
    }

    fn on_entry_removed(&mut self, kind: LedgerKind, id: Uuid) {
        if self.ui.mode.is_json() {
            self.emit_json(&removed_json(kind, id));
            return;
        }
        let title = format!("Removed {} entry", kind.label());
        self.emit_receipt(&title, &[("ID", id.to_string())]);
    }

    fn on_ledger_cleared(&mut self, kind: LedgerKind) {
        if self.ui.mode.is_json() {
            self.emit_json(&cleared_json(kind));
            return;
        }
        let title = format!("Cleared {}", kind.label());
        self.emit_receipt(&title, &[("Ledger", kind.label().to_string())]);
    }

    fn on_summary_computed(&mut self, rows: &[SummaryRow]) {
        // JSON summaries carry totals as well; the command prints those.
        if self.ui.mode.is_json() {
            return;
        }
        print(
            &self.ui,
            &table(&self.ui, &SUMMARY_COLUMNS, &summary_rows(&self.ui, rows)),
        );
    }
}
