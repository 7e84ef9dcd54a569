//! The stock book: both ledgers, their store, a clock, and observers.

use uuid::Uuid;

use super::observer::LedgerObserver;
use super::{Ledger, LedgerRecord};
use crate::clock::{Clock, LocalClock};
use crate::error::Result;
use crate::store::{JsonStore, KeyValueStore};
use crate::summary;
use crate::types::{InventoryEntry, NewOrder, OrderEntry, SummaryRow};

/// Owns one store and the two ledgers persisted in it.
///
/// There is one `StockBook` per process; it assumes it is the only writer
/// of its store.
pub struct StockBook<S> {
    store: JsonStore<S>,
    inventory: Ledger<InventoryEntry>,
    orders: Ledger<OrderEntry>,
    clock: Box<dyn Clock>,
    observers: Vec<Box<dyn LedgerObserver>>,
}

impl<S: KeyValueStore> StockBook<S> {
    /// Load both ledgers from `store`.
    pub fn open(store: S) -> Self {
        let mut store = JsonStore::new(store);
        let inventory = Ledger::load(&mut store);
        let orders = Ledger::load(&mut store);
        Self {
            store,
            inventory,
            orders,
            clock: Box::new(LocalClock),
            observers: Vec::new(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Register an observer for every subsequent mutation and summary.
    pub fn subscribe(&mut self, observer: impl LedgerObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn inventory(&mut self) -> LedgerSession<'_, InventoryEntry, S> {
        LedgerSession {
            ledger: &mut self.inventory,
            store: &mut self.store,
            clock: &*self.clock,
            observers: &mut self.observers,
        }
    }

    pub fn orders(&mut self) -> LedgerSession<'_, OrderEntry, S> {
        LedgerSession {
            ledger: &mut self.orders,
            store: &mut self.store,
            clock: &*self.clock,
            observers: &mut self.observers,
        }
    }

    /// Read-only snapshot of the inventory ledger.
    pub fn inventory_entries(&self) -> &[InventoryEntry] {
        self.inventory.all()
    }

    /// Read-only snapshot of the order ledger.
    pub fn order_entries(&self) -> &[OrderEntry] {
        self.orders.all()
    }

    /// Read access to the order ledger, for searches.
    pub fn order_ledger(&self) -> &Ledger<OrderEntry> {
        &self.orders
    }

    /// Reconcile both ledgers and notify observers with the result.
    pub fn summary(&mut self) -> Vec<SummaryRow> {
        let rows = summary::compute(self.inventory.all(), self.orders.all());
        for observer in self.observers.iter_mut() {
            observer.on_summary_computed(&rows);
        }
        rows
    }

    pub fn store(&self) -> &JsonStore<S> {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store.into_inner()
    }
}

/// Mutable access to one ledger of a `StockBook`.
///
/// Mutations persist first and notify observers only after the write
/// succeeded.
pub struct LedgerSession<'a, E, S> {
    ledger: &'a mut Ledger<E>,
    store: &'a mut JsonStore<S>,
    clock: &'a dyn Clock,
    observers: &'a mut [Box<dyn LedgerObserver>],
}

impl<E: LedgerRecord, S: KeyValueStore> LedgerSession<'_, E, S> {
    /// Remove one entry; `Ok(false)` when it does not exist.
    pub fn remove(&mut self, id: Uuid) -> Result<bool> {
        let removed = self.ledger.remove(self.store, id)?;
        if removed {
            for observer in self.observers.iter_mut() {
                observer.on_entry_removed(E::KIND, id);
            }
        }
        Ok(removed)
    }

    /// Empty the ledger. Calling it on an empty ledger is harmless.
    pub fn clear(&mut self) -> Result<()> {
        self.ledger.clear(self.store)?;
        for observer in self.observers.iter_mut() {
            observer.on_ledger_cleared(E::KIND);
        }
        Ok(())
    }

    fn notify_added(&mut self, entry: &E) {
        for observer in self.observers.iter_mut() {
            observer.on_entry_added(entry.as_entry_ref());
        }
    }
}

impl<S: KeyValueStore> LedgerSession<'_, InventoryEntry, S> {
    pub fn add(&mut self, product: &str, quantity: f64) -> Result<InventoryEntry> {
        let entry = self.ledger.add(self.store, self.clock, product, quantity)?;
        self.notify_added(&entry);
        Ok(entry)
    }
}

impl<S: KeyValueStore> LedgerSession<'_, OrderEntry, S> {
    pub fn add(&mut self, order: NewOrder) -> Result<OrderEntry> {
        let entry = self.ledger.add(self.store, self.clock, order)?;
        self.notify_added(&entry);
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::StockError;
    use crate::ledger::{LedgerEvent, LedgerKind, RecordingObserver};
    use crate::store::MemoryStore;

    /// Store whose writes always fail.
    #[derive(Default)]
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get_raw(&self, key: &str) -> Result<Option<String>> {
            self.inner.get_raw(key)
        }

        fn set_raw(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(StockError::Storage("read-only".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(StockError::Storage("read-only".to_string()))
        }

        fn keys(&self) -> Result<Vec<String>> {
            self.inner.keys()
        }
    }

    fn book() -> StockBook<MemoryStore> {
        StockBook::open(MemoryStore::new()).with_clock(FixedClock::new("2024-03-01 09:30:00"))
    }

    #[test]
    fn test_observers_see_mutations_in_order() {
        let mut book = book();
        let recorder = RecordingObserver::new();
        book.subscribe(recorder.clone());

        let entry = book.inventory().add("Apples", 10.0).unwrap();
        assert!(book.inventory().remove(entry.id).unwrap());
        assert!(!book.inventory().remove(entry.id).unwrap());
        book.orders().clear().unwrap();

        assert_eq!(
            recorder.events(),
            vec![
                LedgerEvent::InventoryAdded(entry.clone()),
                LedgerEvent::Removed(LedgerKind::Inventory, entry.id),
                LedgerEvent::Cleared(LedgerKind::Orders),
            ]
        );
    }

    #[test]
    fn test_rejected_add_notifies_nobody() {
        let mut book = book();
        let recorder = RecordingObserver::new();
        book.subscribe(recorder.clone());

        assert!(book.inventory().add("Apples", 0.0).is_err());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_summary_notifies_observers() {
        let mut book = book();
        let recorder = RecordingObserver::new();
        book.subscribe(recorder.clone());
        book.inventory().add("Apples", 10.0).unwrap();

        let rows = book.summary();

        assert_eq!(rows.len(), 1);
        assert_eq!(
            recorder.events().last(),
            Some(&LedgerEvent::SummaryComputed(rows))
        );
    }

    #[test]
    fn test_failed_write_leaves_ledger_unchanged() {
        let seeded = MemoryStore::new().with_raw(
            "inventoryData",
            r#"[{"product":"Apples","quantity":5,"time":"t"}]"#,
        );
        let mut book = StockBook::open(ReadOnlyStore { inner: seeded });
        let recorder = RecordingObserver::new();
        book.subscribe(recorder.clone());
        let existing = book.inventory_entries()[0].id;

        assert!(book.inventory().add("Pears", 1.0).is_err());
        assert!(book.inventory().remove(existing).is_err());
        assert!(book.inventory().clear().is_err());

        assert_eq!(book.inventory_entries().len(), 1);
        assert_eq!(book.inventory_entries()[0].id, existing);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_state_survives_reopen() {
        let mut book = book();
        book.inventory().add("Apples", 10.0).unwrap();
        book.orders()
            .add(NewOrder::new("Apples", 2.5, 4.0).with_customer("Ana", "555"))
            .unwrap();

        let reopened = StockBook::open(book.into_store());

        assert_eq!(reopened.inventory_entries().len(), 1);
        assert_eq!(reopened.order_entries().len(), 1);
        assert_eq!(reopened.order_entries()[0].total, 10.0);
    }
}
