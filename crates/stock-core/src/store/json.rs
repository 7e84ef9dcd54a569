//! Typed JSON layer over a raw key-value store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::store::traits::KeyValueStore;

/// Stores sequences of records as JSON arrays under named keys.
///
/// Reads never fail: an absent key, a backend read error, or a value that
/// does not parse as a JSON array of `T` all load as an empty sequence.
/// Writes propagate backend errors.
pub struct JsonStore<S> {
    inner: S,
}

impl<S: KeyValueStore> JsonStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Load the sequence stored under `key`, or an empty one.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.inner.get_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key, error = %err, "store read failed; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(key, error = %err, "malformed stored value; treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the sequence stored under `key`.
    pub fn set<T: Serialize>(&mut self, key: &str, values: &[T]) -> Result<()> {
        let raw = serde_json::to_string(values)?;
        self.inner.set_raw(key, &raw)?;
        tracing::debug!(key, records = values.len(), "persisted");
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}
