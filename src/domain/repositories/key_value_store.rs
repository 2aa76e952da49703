//! Key-value store contract used for both index tables.

use async_trait::async_trait;
use std::fmt;

/// Errors raised by a store backend.
#[derive(Debug)]
pub enum StoreError {
    ConnectionError(String),
    CommandError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Store connection error: {}", e),
            Self::CommandError(e) => write!(f, "Store command error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Hash-table style key-value store.
///
/// Each table is a named hash; fields within a table map to string values.
/// Tables are created implicitly by the first write and never expire.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - `HGET`/`HSET` on a Redis server
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads `field` from `table`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the field exists
    /// - `Ok(None)` if the table or the field does not exist
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be reached or rejects the command.
    async fn hash_get(&self, table: &str, field: &str) -> StoreResult<Option<String>>;

    /// Writes `value` to `field` in `table`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be reached or rejects the command.
    async fn hash_set(&self, table: &str, field: &str, value: &str) -> StoreResult<()>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
