//! Domain layer containing the shortener's data model and storage contracts.
//!
//! - [`entities`] - URL records and shorten request/outcome types
//! - [`repositories`] - The key-value store trait both index tables go through
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
