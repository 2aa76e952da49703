//! Redis-backed key-value store.

use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Store implementation on top of Redis hashes (`HGET` / `HSET`).
///
/// Uses a `ConnectionManager`, which multiplexes requests over one
/// connection and reconnects on failure; it is cloned per operation.
/// Errors are returned to the caller as-is, without retries.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn hash_get(&self, table: &str, field: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        let value = conn
            .hget::<_, _, Option<String>>(table, field)
            .await
            .map_err(|e| StoreError::CommandError(format!("HGET {} failed: {}", table, e)))?;

        debug!(
            table = %table,
            field = %field,
            hit = value.is_some(),
            "HGET"
        );

        Ok(value)
    }

    async fn hash_set(&self, table: &str, field: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();

        conn.hset::<_, _, _, ()>(table, field, value)
            .await
            .map_err(|e| StoreError::CommandError(format!("HSET {} failed: {}", table, e)))?;

        debug!(table = %table, field = %field, "HSET");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
