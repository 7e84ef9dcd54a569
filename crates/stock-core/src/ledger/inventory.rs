//! Inventory receipts.

use uuid::Uuid;

use super::Ledger;
use crate::clock::Clock;
use crate::error::Result;
use crate::store::{JsonStore, KeyValueStore};
use crate::types::InventoryEntry;
use crate::validation::{validate_product, validate_quantity};

pub type InventoryLedger = Ledger<InventoryEntry>;

impl Ledger<InventoryEntry> {
    /// Record a receipt of `quantity` units of `product`.
    ///
    /// Validation happens before anything is written: a rejected receipt
    /// leaves both the ledger and the store untouched.
    pub(crate) fn add<S: KeyValueStore>(
        &mut self,
        store: &mut JsonStore<S>,
        clock: &dyn Clock,
        product: &str,
        quantity: f64,
    ) -> Result<InventoryEntry> {
        let product = validate_product(product)?;
        let quantity = validate_quantity(quantity)?;

        let entry = InventoryEntry {
            id: Uuid::new_v4(),
            product,
            quantity,
            timestamp: clock.timestamp(),
        };
        let added = self.append(store, entry)?.clone();
        tracing::debug!(id = %added.id, product = %added.product, quantity, "added inventory entry");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::StockError;
    use crate::store::MemoryStore;

    fn setup() -> (JsonStore<MemoryStore>, InventoryLedger, FixedClock) {
        (
            JsonStore::new(MemoryStore::new()),
            InventoryLedger::new(),
            FixedClock::new("2024-03-01 09:30:00"),
        )
    }

    #[test]
    fn test_add_trims_and_stamps() {
        let (mut store, mut ledger, clock) = setup();

        let entry = ledger.add(&mut store, &clock, "  Apples ", 10.0).unwrap();

        assert_eq!(entry.product, "Apples");
        assert_eq!(entry.quantity, 10.0);
        assert_eq!(entry.timestamp, "2024-03-01 09:30:00");
        assert_eq!(ledger.all(), &[entry]);
    }

    #[test]
    fn test_add_rejects_small_quantity_without_writing() {
        let (mut store, mut ledger, clock) = setup();

        let err = ledger.add(&mut store, &clock, "Apples", 0.05).unwrap_err();

        assert!(matches!(err, StockError::Validation(_)));
        assert_eq!(err.reason(), "quantity must be at least 0.1");
        assert!(ledger.is_empty());
        assert_eq!(store.inner().writes(), 0);
    }

    #[test]
    fn test_add_rejects_blank_product() {
        let (mut store, mut ledger, clock) = setup();

        let err = ledger.add(&mut store, &clock, "   ", 1.0).unwrap_err();

        assert!(err.is_validation());
        assert!(ledger.is_empty());
        assert_eq!(store.inner().writes(), 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (mut store, mut ledger, clock) = setup();
        ledger.add(&mut store, &clock, "Apples", 1.0).unwrap();

        ledger.clear(&mut store).unwrap();
        let once: Vec<InventoryEntry> = store.get("inventoryData");
        ledger.clear(&mut store).unwrap();
        let twice: Vec<InventoryEntry> = store.get("inventoryData");

        assert!(ledger.is_empty());
        assert!(once.is_empty());
        assert_eq!(once, twice);
        assert_eq!(
            store.inner().get_raw("inventoryData").unwrap(),
            Some("[]".to_string())
        );
    }
}
