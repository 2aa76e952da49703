//! Helper functions shared by the service layers.
//!
//! - [`code_generator`] - Identifier generation strategies
//! - [`validation`] - URL and alias validation

pub mod code_generator;
pub mod validation;
