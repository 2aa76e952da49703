//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ShortenerConfig, ShortenerService};
use crate::domain::repositories::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<dyn KeyValueStore>>,
}

impl AppState {
    /// Builds the state around an already connected store.
    pub fn new(store: Arc<dyn KeyValueStore>, config: ShortenerConfig) -> Self {
        Self {
            shortener: Arc::new(ShortenerService::new(store, config)),
        }
    }
}
