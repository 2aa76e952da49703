//! HTTP request handlers for JSON endpoints.

pub mod fallback;
pub mod health;
pub mod redirect;

pub use fallback::unsupported_method_handler;
pub use health::{health_handler, readiness_handler};
pub use redirect::redirect_handler;
