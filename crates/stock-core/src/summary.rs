//! Per-product reconciliation of received stock against ordered stock.
//!
//! The summary is a pure function of two ledger snapshots. Nothing here is
//! cached or persisted; callers recompute whenever they want a fresh view.

use std::collections::HashMap;

use serde::Serialize;

use crate::rounding::{round_money, round_quantity};
use crate::types::{InventoryEntry, OrderEntry, SummaryRow};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    received: f64,
    ordered: f64,
}

/// Build one row per distinct product across both ledgers.
///
/// Rows come out in first-seen order: inventory entries are folded before
/// orders, so a product that only appears in orders lands after every
/// product that was ever received. Products whose remaining stock is zero
/// still get a row. Values are rounded to three decimals.
pub fn compute(inventory: &[InventoryEntry], orders: &[OrderEntry]) -> Vec<SummaryRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(&str, Tally)> = Vec::new();

    let received = inventory
        .iter()
        .map(|entry| (entry.product.as_str(), entry.quantity, true));
    let ordered = orders
        .iter()
        .map(|order| (order.product.as_str(), order.quantity, false));

    for (product, quantity, is_receipt) in received.chain(ordered) {
        let position = *index.entry(product).or_insert_with(|| {
            tallies.push((product, Tally::default()));
            tallies.len() - 1
        });
        let tally = &mut tallies[position].1;
        if is_receipt {
            tally.received += quantity;
        } else {
            tally.ordered += quantity;
        }
    }

    tallies
        .into_iter()
        .map(|(product, tally)| SummaryRow {
            product: product.to_string(),
            total_received: round_quantity(tally.received),
            total_ordered: round_quantity(tally.ordered),
            remaining: round_quantity(tally.received - tally.ordered),
        })
        .collect()
}

/// Grand totals across a summary, plus order revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryTotals {
    pub products: usize,
    pub received: f64,
    pub ordered: f64,
    pub remaining: f64,
    pub revenue: f64,
}

impl SummaryTotals {
    pub fn from_rows(rows: &[SummaryRow], orders: &[OrderEntry]) -> Self {
        let received: f64 = rows.iter().map(|row| row.total_received).sum();
        let ordered: f64 = rows.iter().map(|row| row.total_ordered).sum();
        let revenue: f64 = orders.iter().map(|order| order.total).sum();
        Self {
            products: rows.len(),
            received: round_quantity(received),
            ordered: round_quantity(ordered),
            remaining: round_quantity(received - ordered),
            revenue: round_money(revenue),
        }
    }
}
