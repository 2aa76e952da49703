//! Web layer serving the HTML shorten page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`forms`] - Submitted form payloads and their validation
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod forms;
pub mod handlers;
pub mod routes;
