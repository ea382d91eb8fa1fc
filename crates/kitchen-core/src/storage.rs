//! Durable key-value store boundary.

use crate::error::Result;
use async_trait::async_trait;

/// An abstract durable key-value store.
///
/// Values are opaque string blobs that survive process restarts. The store
/// is scoped per installation, not per account; account scoping happens
/// through the key-naming convention in [`crate::keys`]. Implementations
/// provide no transactions and no schema.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: a value is stored under the key
    /// - `Ok(None)`: nothing stored under the key
    /// - `Err(_)`: the read itself failed
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
