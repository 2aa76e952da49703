//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::Uri,
    response::{IntoResponse, Redirect},
};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist or does not
/// percent-decode to UTF-8.
/// Returns 500 Internal Server Error if the store fails.
pub async fn redirect_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|rejection| {
        warn!(path = %uri.path(), error = %rejection, "Undecodable short URL identifier");
        AppError::OriginalUrlNotFound {
            identifier: uri.path().trim_start_matches('/').to_string(),
        }
    })?;

    let original_url = state.shortener.redirect(&id).await?;

    Ok(Redirect::temporary(&original_url))
}
