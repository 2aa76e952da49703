//! Core domain entities.
//!
//! - [`UrlRecord`] - The value stored under an identifier in the reverse index
//! - [`ShortenRequest`] / [`ShortenOutcome`] - Input and output of a shorten operation

pub mod shorten;
pub mod url_record;

pub use shorten::{ShortenOutcome, ShortenRequest};
pub use url_record::UrlRecord;
