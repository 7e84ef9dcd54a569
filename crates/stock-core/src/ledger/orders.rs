//! Customer orders.

use uuid::Uuid;

use super::Ledger;
use crate::clock::Clock;
use crate::error::Result;
use crate::rounding::round_money;
use crate::store::{JsonStore, KeyValueStore};
use crate::types::{NewOrder, OrderEntry};
use crate::validation::{normalize_text, validate_price, validate_product, validate_quantity};

pub type OrderLedger = Ledger<OrderEntry>;

impl Ledger<OrderEntry> {
    /// Record a customer order.
    ///
    /// The total is computed once here as `round(price * qty, 2)` and stored
    /// with the entry.
    pub(crate) fn add<S: KeyValueStore>(
        &mut self,
        store: &mut JsonStore<S>,
        clock: &dyn Clock,
        order: NewOrder,
    ) -> Result<OrderEntry> {
        let product = validate_product(&order.product)?;
        let quantity = validate_quantity(order.quantity)?;
        let unit_price = validate_price(order.unit_price)?;

        let entry = OrderEntry {
            id: Uuid::new_v4(),
            customer_name: normalize_text(&order.customer_name),
            customer_phone: normalize_text(&order.customer_phone),
            product,
            unit_price,
            quantity,
            total: round_money(unit_price * quantity),
            timestamp: clock.timestamp(),
        };
        let added = self.append(store, entry)?.clone();
        tracing::debug!(
            id = %added.id,
            product = %added.product,
            total = added.total,
            "added order entry"
        );
        Ok(added)
    }

    /// Orders whose customer name contains `term` (case-insensitive) or whose
    /// phone contains `term` verbatim. An empty term returns every order.
    pub fn search(&self, term: &str) -> Vec<OrderEntry> {
        if term.is_empty() {
            return self.all().to_vec();
        }
        let folded = term.to_lowercase();
        self.all()
            .iter()
            .filter(|order| {
                order.customer_name.to_lowercase().contains(&folded)
                    || order.customer_phone.contains(term)
            })
            .cloned()
            .collect()
    }

    /// Orders whose product contains `term`, case-insensitive.
    pub fn search_product(&self, term: &str) -> Vec<OrderEntry> {
        let folded = term.to_lowercase();
        self.all()
            .iter()
            .filter(|order| order.product.to_lowercase().contains(&folded))
            .cloned()
            .collect()
    }
}
