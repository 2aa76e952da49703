//! Form payloads submitted from the HTML page.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::ShortenRequest;
use crate::error::{EMPTY_URL_CODE, INVALID_ALIAS_CODE, INVALID_URL_CODE};
use crate::utils::validation::{is_reserved_alias, validate_alias, validate_url};

/// Fields posted to `POST /short`.
///
/// Missing fields deserialize as empty strings so that an absent URL is
/// reported as an empty URL rather than a malformed request.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(rename = "originalURL", default)]
    #[validate(custom(function = "check_original_url"))]
    pub original_url: String,

    #[serde(default)]
    #[validate(custom(function = "check_alias"))]
    pub alias: String,
}

impl ShortenForm {
    /// Converts the form into a shorten request; an empty alias means none.
    pub fn into_request(self) -> ShortenRequest {
        ShortenRequest::new(self.original_url, Some(self.alias))
    }
}

fn check_original_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(EMPTY_URL_CODE));
    }

    if !validate_url(value) {
        return Err(ValidationError::new(INVALID_URL_CODE));
    }

    Ok(())
}

fn check_alias(value: &str) -> Result<(), ValidationError> {
    if validate_alias(value) && !is_reserved_alias(value) {
        Ok(())
    } else {
        Err(ValidationError::new(INVALID_ALIAS_CODE))
    }
}
