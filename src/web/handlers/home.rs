//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the home page.
///
/// Renders `templates/index.html` with the shorten form and, after a
/// submission, a status message and/or the resulting short URL.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub message: Option<String>,
    pub short_url: Option<String>,
}

impl HomeTemplate {
    /// Empty page with just the form.
    pub fn empty() -> Self {
        Self {
            message: None,
            short_url: None,
        }
    }

    /// Page showing only a message, used for errors.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            short_url: None,
        }
    }
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate::empty()
}
