//! In-process key-value store.

use crate::domain::repositories::{KeyValueStore, StoreResult};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// Store implementation keeping every table in process memory.
///
/// Backed by a `DashMap` keyed by `(table, field)`, so concurrent requests
/// touching different fields do not block each other. Contents are lost when
/// the process exits; meant for tests and local runs without Redis.
#[derive(Debug)]
pub struct MemoryStore {
    entries: DashMap<(String, String), String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (data is not persisted)");
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of fields currently stored in `table`.
    pub fn field_count(&self, table: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.key().0 == table)
            .count()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn hash_get(&self, table: &str, field: &str) -> StoreResult<Option<String>> {
        let key = (table.to_owned(), field.to_owned());
        Ok(self.entries.get(&key).map(|value| value.clone()))
    }

    async fn hash_set(&self, table: &str, field: &str, value: &str) -> StoreResult<()> {
        self.entries
            .insert((table.to_owned(), field.to_owned()), value.to_owned());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
