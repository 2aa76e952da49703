//! Handler for the shorten form submission.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};
use validator::Validate;

use super::home::HomeTemplate;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::ShortenForm;

/// Message shown when the submitted URL was shortened before.
pub const ALREADY_EXISTS_MESSAGE: &str = "Shortened URL of the given URL already exists";

/// Shortens the submitted URL and renders the result page.
///
/// # Endpoint
///
/// `POST /short` (form fields `originalURL`, `alias`)
///
/// # Response Codes
///
/// - **200 OK**: Page with the short URL
/// - **400 Bad Request**: Page with the validation or alias-collision message;
///   a missing or non URL-encoded body counts as an empty URL
/// - **500 Internal Server Error**: Page asking to try again later
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Response {
    match shorten(&state, form).await {
        Ok(page) => page.into_response(),
        Err(err) => {
            if err.is_internal() {
                error!(error = %err, "Shorten request failed");
            } else {
                warn!(error = %err, "Shorten request rejected");
            }

            (
                err.status_code(),
                HomeTemplate::with_message(err.user_message()),
            )
                .into_response()
        }
    }
}

async fn shorten(
    state: &AppState,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<HomeTemplate, AppError> {
    let Form(form) = form.map_err(|rejection| {
        warn!(error = %rejection, "Unreadable shorten form");
        AppError::EmptyUrlField
    })?;

    form.validate()?;

    let outcome = state.shortener.shorten(form.into_request()).await?;

    Ok(HomeTemplate {
        message: outcome
            .already_existed
            .then(|| ALREADY_EXISTS_MESSAGE.to_string()),
        short_url: Some(state.shortener.short_url(&outcome.identifier)),
    })
}
