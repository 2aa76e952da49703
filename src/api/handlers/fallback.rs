//! Handler for requests that hit a known path with the wrong method.

use tracing::warn;

use crate::error::AppError;

/// Rejects the request with 400 and `{"message": "not supported method"}`.
pub async fn unsupported_method_handler() -> AppError {
    warn!("{}", AppError::UnsupportedMethod);
    AppError::UnsupportedMethod
}
