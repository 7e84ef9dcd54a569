//! Persistence for ledger state.
//!
//! Backends implement the raw `KeyValueStore` trait; `JsonStore` adds typed
//! get/set of JSON arrays on top of any backend.

mod json;
mod memory;
mod sqlite;
mod traits;

pub use json::JsonStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::KeyValueStore;

/// Store key holding the inventory ledger.
pub const INVENTORY_KEY: &str = "inventoryData";

/// Store key holding the order ledger.
pub const ORDERS_KEY: &str = "orderData";
