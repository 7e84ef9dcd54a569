//! Inventory and order ledgers.
//!
//! A `Ledger<E>` owns an insertion-ordered list of records and persists the
//! whole list under its store key after every mutation. In-memory state is
//! only changed once the write has succeeded, so a failed persist leaves the
//! ledger exactly as it was.
//!
//! `StockBook` bundles both ledgers with a store, a clock, and observers;
//! it is the entry point the CLI uses.

mod book;
mod inventory;
mod observer;
mod orders;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::store::{JsonStore, KeyValueStore, INVENTORY_KEY, ORDERS_KEY};
use crate::types::{InventoryEntry, OrderEntry};

pub use book::{LedgerSession, StockBook};
pub use inventory::InventoryLedger;
pub use observer::{EntryRef, LedgerEvent, LedgerObserver, RecordingObserver};
pub use orders::OrderLedger;

/// Which of the two ledgers a record or event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerKind {
    Inventory,
    Orders,
}

impl LedgerKind {
    /// Key under which this ledger is persisted.
    pub fn store_key(self) -> &'static str {
        match self {
            LedgerKind::Inventory => INVENTORY_KEY,
            LedgerKind::Orders => ORDERS_KEY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LedgerKind::Inventory => "inventory",
            LedgerKind::Orders => "orders",
        }
    }
}

/// A record that can live in a `Ledger`.
pub trait LedgerRecord: Clone + Serialize + DeserializeOwned {
    const KIND: LedgerKind;

    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
    fn as_entry_ref(&self) -> EntryRef<'_>;
}

impl LedgerRecord for InventoryEntry {
    const KIND: LedgerKind = LedgerKind::Inventory;

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn as_entry_ref(&self) -> EntryRef<'_> {
        EntryRef::Inventory(self)
    }
}

impl LedgerRecord for OrderEntry {
    const KIND: LedgerKind = LedgerKind::Orders;

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn as_entry_ref(&self) -> EntryRef<'_> {
        EntryRef::Order(self)
    }
}

/// Insertion-ordered collection of records of one kind.
///
/// Mutations are crate-private; outside callers change a ledger through a
/// `StockBook` session so observers always hear about it:
///
/// ```compile_fail
/// use stock_core::{InventoryEntry, JsonStore, Ledger, MemoryStore};
///
/// let mut store = JsonStore::new(MemoryStore::new());
/// let mut ledger: Ledger<InventoryEntry> = Ledger::new();
/// ledger.clear(&mut store).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Ledger<E> {
    entries: Vec<E>,
}

impl<E: LedgerRecord> Default for Ledger<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: LedgerRecord> Ledger<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Load the ledger from its store key. Malformed data loads empty.
    ///
    /// Records stored without an id are given one, and the list is written
    /// back right away so the id stays the same on the next load. If that
    /// write fails the ids live in memory only.
    pub fn load<S: KeyValueStore>(store: &mut JsonStore<S>) -> Self {
        let mut entries: Vec<E> = store.get(E::KIND.store_key());
        let mut assigned = 0;
        for entry in entries.iter_mut().filter(|entry| entry.id().is_nil()) {
            entry.set_id(Uuid::new_v4());
            assigned += 1;
        }
        if assigned > 0 {
            match store.set(E::KIND.store_key(), &entries) {
                Ok(()) => tracing::debug!(
                    ledger = E::KIND.label(),
                    assigned,
                    "saved ids for legacy records"
                ),
                Err(err) => tracing::warn!(
                    ledger = E::KIND.label(),
                    error = %err,
                    "could not save ids for legacy records"
                ),
            }
        }
        tracing::debug!(ledger = E::KIND.label(), entries = entries.len(), "loaded ledger");
        Self { entries }
    }

    /// Current snapshot in insertion order.
    pub fn all(&self) -> &[E] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&E> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an already-validated record and persist the full list.
    pub(crate) fn append<S: KeyValueStore>(
        &mut self,
        store: &mut JsonStore<S>,
        entry: E,
    ) -> Result<&E> {
        self.entries.push(entry);
        if let Err(err) = store.set(E::KIND.store_key(), &self.entries) {
            self.entries.pop();
            return Err(err);
        }
        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    /// Remove the record with `id`.
    ///
    /// Returns `Ok(false)` without touching the store when no record matches.
    pub(crate) fn remove<S: KeyValueStore>(
        &mut self,
        store: &mut JsonStore<S>,
        id: Uuid,
    ) -> Result<bool> {
        let Some(index) = self.entries.iter().position(|entry| entry.id() == id) else {
            tracing::debug!(ledger = E::KIND.label(), %id, "remove: no such entry");
            return Ok(false);
        };

        let removed = self.entries.remove(index);
        if let Err(err) = store.set(E::KIND.store_key(), &self.entries) {
            self.entries.insert(index, removed);
            return Err(err);
        }
        tracing::debug!(ledger = E::KIND.label(), %id, "removed entry");
        Ok(true)
    }

    /// Empty the ledger and persist the empty list.
    pub(crate) fn clear<S: KeyValueStore>(&mut self, store: &mut JsonStore<S>) -> Result<()> {
        store.set::<E>(E::KIND.store_key(), &[])?;
        self.entries.clear();
        tracing::debug!(ledger = E::KIND.label(), "cleared ledger");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn entry(product: &str) -> InventoryEntry {
        InventoryEntry {
            id: Uuid::new_v4(),
            product: product.to_string(),
            quantity: 1.0,
            timestamp: "t".to_string(),
        }
    }

    #[test]
    fn test_store_keys() {
        assert_eq!(LedgerKind::Inventory.store_key(), "inventoryData");
        assert_eq!(LedgerKind::Orders.store_key(), "orderData");
    }

    #[test]
    fn test_append_preserves_order_and_persists() {
        let mut store = JsonStore::new(MemoryStore::new());
        let mut ledger: Ledger<InventoryEntry> = Ledger::new();

        ledger.append(&mut store, entry("b")).unwrap();
        ledger.append(&mut store, entry("a")).unwrap();

        let products: Vec<&str> = ledger.all().iter().map(|e| e.product.as_str()).collect();
        assert_eq!(products, vec!["b", "a"]);

        let reloaded: Ledger<InventoryEntry> = Ledger::load(&mut store);
        assert_eq!(reloaded.all(), ledger.all());
    }

    #[test]
    fn test_load_saves_ids_for_records_without_one() {
        let mut store = JsonStore::new(
            MemoryStore::new()
                .with_raw("inventoryData", r#"[{"product":"Apples","quantity":10,"time":"3/1/2024"}]"#),
        );

        let first: Ledger<InventoryEntry> = Ledger::load(&mut store);
        let second: Ledger<InventoryEntry> = Ledger::load(&mut store);

        let id = first.all()[0].id;
        assert!(!id.is_nil());
        assert_eq!(second.all()[0].id, id);
        assert_eq!(store.inner().writes(), 1);
        assert!(store
            .inner()
            .get_raw("inventoryData")
            .unwrap()
            .unwrap()
            .contains(&id.to_string()));
    }

    #[test]
    fn test_load_with_ids_does_not_write() {
        let mut store = JsonStore::new(MemoryStore::new());
        let mut ledger: Ledger<InventoryEntry> = Ledger::new();
        ledger.append(&mut store, entry("a")).unwrap();
        let writes = store.inner().writes();

        let _reloaded: Ledger<InventoryEntry> = Ledger::load(&mut store);

        assert_eq!(store.inner().writes(), writes);
    }

    #[test]
    fn test_remove_absent_does_not_write() {
        let mut store = JsonStore::new(MemoryStore::new());
        let mut ledger: Ledger<InventoryEntry> = Ledger::new();
        ledger.append(&mut store, entry("a")).unwrap();
        let writes = store.inner().writes();

        assert!(!ledger.remove(&mut store, Uuid::new_v4()).unwrap());
        assert_eq!(store.inner().writes(), writes);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_remove_removes_exactly_one() {
        let mut store = JsonStore::new(MemoryStore::new());
        let mut ledger: Ledger<InventoryEntry> = Ledger::new();
        let first = ledger.append(&mut store, entry("a")).unwrap().id;
        ledger.append(&mut store, entry("a")).unwrap();

        assert!(ledger.remove(&mut store, first).unwrap());
        assert_eq!(ledger.len(), 1);
        assert!(ledger.get(first).is_none());
    }
}
