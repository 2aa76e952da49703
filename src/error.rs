//! Application error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

/// Text shown to users when a request fails for reasons outside their control.
pub const TRY_AGAIN_MESSAGE: &str = "Please try again after some time";

/// Validation codes produced by the shorten form, in reporting priority.
pub const EMPTY_URL_CODE: &str = "empty_url";
pub const INVALID_URL_CODE: &str = "invalid_url";
pub const INVALID_ALIAS_CODE: &str = "invalid_alias";

/// JSON error body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("URL field cannot be empty")]
    EmptyUrlField,

    #[error("invalid url")]
    InvalidUrl,

    #[error("invalid alias")]
    InvalidAlias,

    #[error("given alias already exists")]
    AliasAlreadyExists { alias: String },

    #[error("original url for the given short url does not exist")]
    OriginalUrlNotFound { identifier: String },

    #[error("not supported method")]
    UnsupportedMethod,

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    #[error("URL record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no free identifier after {attempts} attempts")]
    IdentifierExhausted { attempts: usize },
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyUrlField
            | AppError::InvalidUrl
            | AppError::InvalidAlias
            | AppError::AliasAlreadyExists { .. }
            | AppError::UnsupportedMethod => StatusCode::BAD_REQUEST,
            AppError::OriginalUrlNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_)
            | AppError::Serialization(_)
            | AppError::IdentifierExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true for failures that are not the caller's fault.
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Message safe to show to end users.
    ///
    /// Internal failures collapse into [`TRY_AGAIN_MESSAGE`]; their details
    /// only go to the log.
    pub fn user_message(&self) -> String {
        if self.is_internal() {
            TRY_AGAIN_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            message: self.user_message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Maps form validation failures to the first error in reporting order:
/// empty URL, then invalid URL, then invalid alias.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let has_code = |code: &str| {
            errors
                .field_errors()
                .values()
                .flat_map(|field| field.iter())
                .any(|e| e.code == code)
        };

        if has_code(EMPTY_URL_CODE) {
            AppError::EmptyUrlField
        } else if has_code(INVALID_URL_CODE) {
            AppError::InvalidUrl
        } else if has_code(INVALID_ALIAS_CODE) {
            AppError::InvalidAlias
        } else {
            AppError::InvalidUrl
        }
    }
}
