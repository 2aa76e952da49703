//! # Short URL
//!
//! A small URL shortening service built with Axum and Redis.
//!
//! Long URLs are mapped to short identifiers (generated, or a user-chosen
//! alias) and stored in two Redis hashes: a forward index from original URL
//! to identifier and a reverse index from identifier to a JSON record.
//! Visiting `/{id}` redirects to the original URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, requests and the store trait
//! - **Application Layer** ([`application`]) - Shortening and lookup logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Redirect, health probes, JSON errors
//! - **Web Layer** ([`web`]) - HTML form for shortening URLs
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! export DOMAIN_NAME="http://localhost:8080/"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenerConfig, ShortenerService};
    pub use crate::domain::entities::{ShortenOutcome, ShortenRequest, UrlRecord};
    pub use crate::domain::repositories::KeyValueStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
