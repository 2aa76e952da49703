//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, shorten_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Page routes.
///
/// # Endpoints
///
/// - `GET  /`      - Home page with the shorten form
/// - `POST /short` - Form submission
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/short", post(shorten_handler))
}
