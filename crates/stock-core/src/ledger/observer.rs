//! Observer interface between the ledgers and whatever renders them.
//!
//! The core never formats output. Render adapters subscribe to a `StockBook`
//! and turn these callbacks into table rows, receipts, or JSON.

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use super::LedgerKind;
use crate::types::{InventoryEntry, OrderEntry, SummaryRow};

/// Borrowed view of a record from either ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryRef<'a> {
    Inventory(&'a InventoryEntry),
    Order(&'a OrderEntry),
}

impl EntryRef<'_> {
    pub fn kind(&self) -> LedgerKind {
        match self {
            EntryRef::Inventory(_) => LedgerKind::Inventory,
            EntryRef::Order(_) => LedgerKind::Orders,
        }
    }
}

/// Callbacks fired after a mutation has been persisted.
///
/// Every method defaults to a no-op so adapters implement only what they show.
pub trait LedgerObserver {
    fn on_entry_added(&mut self, _entry: EntryRef<'_>) {}

    fn on_entry_removed(&mut self, _kind: LedgerKind, _id: Uuid) {}

    fn on_ledger_cleared(&mut self, _kind: LedgerKind) {}

    fn on_summary_computed(&mut self, _rows: &[SummaryRow]) {}
}

/// Owned copy of an observer callback.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    InventoryAdded(InventoryEntry),
    OrderAdded(OrderEntry),
    Removed(LedgerKind, Uuid),
    Cleared(LedgerKind),
    SummaryComputed(Vec<SummaryRow>),
}

/// Observer that records every callback; clones share one event log.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<LedgerEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events.borrow().clone()
    }
}

impl LedgerObserver for RecordingObserver {
    fn on_entry_added(&mut self, entry: EntryRef<'_>) {
        let event = match entry {
            EntryRef::Inventory(entry) => LedgerEvent::InventoryAdded(entry.clone()),
            EntryRef::Order(entry) => LedgerEvent::OrderAdded(entry.clone()),
        };
        self.events.borrow_mut().push(event);
    }

    fn on_entry_removed(&mut self, kind: LedgerKind, id: Uuid) {
        self.events.borrow_mut().push(LedgerEvent::Removed(kind, id));
    }

    fn on_ledger_cleared(&mut self, kind: LedgerKind) {
        self.events.borrow_mut().push(LedgerEvent::Cleared(kind));
    }

    fn on_summary_computed(&mut self, rows: &[SummaryRow]) {
        self.events
            .borrow_mut()
            .push(LedgerEvent::SummaryComputed(rows.to_vec()));
    }
}
