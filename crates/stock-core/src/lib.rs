//! # Stock Core
//!
//! Core library for Stock - a small inventory and order book that reconciles
//! goods received against goods sold.
//!
//! This crate provides the domain logic, persistence abstractions, and data
//! models independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **store**: Key-value persistence (SQLite and in-memory backends)
//! - **types**: Inventory, order, and summary records
//! - **validation**: Input rules for new entries
//! - **ledger**: Inventory and order ledgers, observers, and the `StockBook`
//! - **summary**: Per-product reconciliation of both ledgers
//! - **fs**: Atomic file writes for exported artifacts

pub mod clock;
pub mod error;
pub mod fs;
pub mod ledger;
pub mod rounding;
pub mod store;
pub mod summary;
pub mod types;
pub mod validation;

pub use clock::{Clock, FixedClock, LocalClock};
pub use error::{Result, StockError};
pub use ledger::{
    EntryRef, Ledger, LedgerKind, LedgerObserver, LedgerRecord, LedgerSession, StockBook,
};
pub use store::{JsonStore, KeyValueStore, MemoryStore, SqliteStore};
pub use summary::{compute, SummaryTotals};
pub use types::{InventoryEntry, NewOrder, OrderEntry, SummaryRow};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
