//! Infrastructure layer for external integrations.
//!
//! Provides concrete implementations of the storage contract defined in
//! [`crate::domain::repositories`].
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory key-value stores

pub mod store;
