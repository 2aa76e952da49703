//! Key-value store backends.
//!
//! Implements [`crate::domain::repositories::KeyValueStore`] twice:
//! - [`RedisStore`] - Production backend using Redis hashes
//! - [`MemoryStore`] - In-process backend for tests and local runs

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
