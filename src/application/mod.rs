//! Application layer services implementing business logic.
//!
//! Services consume the storage contract from [`crate::domain::repositories`]
//! and expose the operations HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shorten and redirect operations

pub mod services;
