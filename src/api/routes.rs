//! API route configuration.

use crate::api::handlers::{health_handler, readiness_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public JSON routes.
///
/// # Endpoints
///
/// - `GET /healthz` - Liveness probe
/// - `GET /readyz`  - Readiness probe including the store
/// - `GET /{id}`    - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/readyz", get(readiness_handler))
        .route("/{id}", get(redirect_handler))
}
