//! Core data types for the inventory and order ledgers.
//!
//! Persisted field names match the stored layout: inventory records are
//! `{id, product, quantity, time}` and order records are
//! `{id, name, phone, product, price, qty, total, time}`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A receipt of stock into inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Entry identity, used only for deletion and display.
    ///
    /// Records persisted without an id deserialize with the nil id; loading
    /// a ledger assigns and saves a real one.
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,

    /// Product name (trimmed, non-empty)
    pub product: String,

    /// Quantity received, at least 0.1
    pub quantity: f64,

    /// Creation time as a display string
    #[serde(rename = "time")]
    pub timestamp: String,
}

/// A customer order.
///
/// `total` is fixed at creation as `round(unit_price * quantity, 2)` and is
/// never recomputed, so historical totals survive later pricing changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEntry {
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,

    #[serde(rename = "name")]
    pub customer_name: String,

    #[serde(rename = "phone")]
    pub customer_phone: String,

    pub product: String,

    #[serde(rename = "price")]
    pub unit_price: f64,

    #[serde(rename = "qty")]
    pub quantity: f64,

    pub total: f64,

    #[serde(rename = "time")]
    pub timestamp: String,
}

/// Builder for creating new orders.
#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub product: String,
    pub unit_price: f64,
    pub quantity: f64,
}

impl NewOrder {
    pub fn new(product: impl Into<String>, unit_price: f64, quantity: f64) -> Self {
        Self {
            customer_name: String::new(),
            customer_phone: String::new(),
            product: product.into(),
            unit_price,
            quantity,
        }
    }

    pub fn with_customer(mut self, name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self.customer_phone = phone.into();
        self
    }
}

/// One reconciled product line. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub product: String,

    #[serde(rename = "totalReceived")]
    pub total_received: f64,

    #[serde(rename = "totalOrdered")]
    pub total_ordered: f64,

    /// `total_received - total_ordered`; negative when oversold.
    pub remaining: f64,
}
