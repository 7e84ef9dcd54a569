//! Key-value store trait definition.
//!
//! The `KeyValueStore` trait is the raw persistence seam: named string values,
//! overwritten wholesale. Typed access and the "malformed means empty" policy
//! live one level up in `JsonStore`.

use crate::error::Result;

/// Durable storage of named string values local to the running instance.
///
/// Implementations must ensure:
/// - `set_raw` is durable when it returns `Ok`
/// - the last write to a key wins; there is no conflict detection
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written or was removed.
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StockError::Storage` if the backend cannot persist the value.
    fn set_raw(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// List stored keys in ascending order.
    fn keys(&self) -> Result<Vec<String>>;
}
