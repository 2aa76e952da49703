#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use shorturl::application::services::ShortenerConfig;
use shorturl::domain::entities::UrlRecord;
use shorturl::domain::repositories::{KeyValueStore, StoreError, StoreResult};
use shorturl::infrastructure::store::MemoryStore;
use shorturl::routes::router;
use shorturl::state::AppState;
use std::sync::Arc;

pub const TEST_DOMAIN: &str = "http://short.test/";

pub fn test_config() -> ShortenerConfig {
    ShortenerConfig {
        domain: TEST_DOMAIN.to_string(),
        ..ShortenerConfig::default()
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), test_config());

    (state, store)
}

pub fn create_test_app() -> (Router, Arc<MemoryStore>) {
    let (state, store) = create_test_state();

    (router(state), store)
}

/// Writes a record straight into the reverse index, bypassing the service.
pub async fn seed_record(store: &MemoryStore, identifier: &str, url: &str, alias: Option<&str>) {
    let config = test_config();
    let record = UrlRecord::new(url, alias.map(str::to_string));

    store
        .hash_set(
            &config.reverse_table,
            identifier,
            &record.to_json().unwrap(),
        )
        .await
        .unwrap();
}

/// Store whose every call fails, as if Redis were down.
pub struct DownStore;

#[async_trait]
impl KeyValueStore for DownStore {
    async fn hash_get(&self, _table: &str, _field: &str) -> StoreResult<Option<String>> {
        Err(StoreError::ConnectionError("connection refused".to_string()))
    }

    async fn hash_set(&self, _table: &str, _field: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::ConnectionError("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_down_app() -> Router {
    let state = AppState::new(Arc::new(DownStore), test_config());

    router(state)
}
