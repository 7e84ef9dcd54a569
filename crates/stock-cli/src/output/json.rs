//! JSON output for `--json`.

use serde::Serialize;
use stock_core::{LedgerKind, SummaryRow, SummaryTotals};
use uuid::Uuid;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn summary_json(rows: &[SummaryRow], totals: &SummaryTotals) -> serde_json::Value {
    serde_json::json!({
        "rows": rows,
        "totals": totals,
    })
}

pub fn removed_json(kind: LedgerKind, id: Uuid) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "ledger": kind.label(),
        "removed": id,
    })
}

pub fn cleared_json(kind: LedgerKind) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "ledger": kind.label(),
        "cleared": true,
    })
}
