//! HTML template rendering handlers.

mod home;
mod shorten;

pub use home::{HomeTemplate, home_handler};
pub use shorten::{ALREADY_EXISTS_MESSAGE, shorten_handler};
