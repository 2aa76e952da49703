//! Storage contracts for the domain layer.
//!
//! The shortener persists two logical tables through a single
//! [`KeyValueStore`]:
//!
//! - the forward index, original URL → identifier
//! - the reverse index, identifier → serialized [`crate::domain::entities::UrlRecord`]
//!
//! Implementations live in `crate::infrastructure::store`; a `mockall` mock
//! is generated for unit tests.

pub mod key_value_store;

pub use key_value_store::{KeyValueStore, StoreError, StoreResult};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
