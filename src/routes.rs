//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`         - Home page with the shorten form
//! - `POST /short`    - Shorten form submission
//! - `GET  /healthz`  - Liveness probe
//! - `GET  /readyz`   - Readiness probe (store ping)
//! - `GET  /{id}`     - Short URL redirect
//! - `/static/*`      - Static assets
//!
//! Any other method on a known path is answered with `400 Bad Request`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::unsupported_method_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes and the tracing layer applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::routes())
        .merge(web::routes::routes())
        .method_not_allowed_fallback(unsupported_method_handler)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] behind trailing slash
/// normalization, so `/my-alias/` resolves like `/my-alias`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
