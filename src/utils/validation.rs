//! Syntactic validation of submitted URLs and aliases.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

/// Maximum alias length, in characters.
pub const MAX_ALIAS_LENGTH: usize = 15;

/// Punctuation that may not appear in an alias.
static FORBIDDEN_ALIAS_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*()+={}\[\]|\\`/?.>,<:;']").unwrap());

/// Aliases that would be shadowed by the service's own routes.
const RESERVED_ALIASES: &[&str] = &["healthz", "readyz", "short", "static"];

/// Returns true if `raw` is an absolute URL with a scheme and a host.
///
/// # Rules
///
/// - Empty strings are invalid
/// - Relative URLs and scheme-less strings are invalid
/// - The scheme must be followed by `://` and a non-empty host
/// - Surrounding whitespace and control characters are rejected rather than trimmed
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com"));
/// assert!(!validate_url("not a url"));
/// assert!(!validate_url("mailto:someone@example.com"));
/// ```
pub fn validate_url(raw: &str) -> bool {
    if raw.is_empty() || raw.trim() != raw || raw.chars().any(char::is_control) {
        return false;
    }

    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            debug!(url = %raw, error = %e, "Rejected URL");
            return false;
        }
    };

    // `Url::parse` accepts `http:example.com`; require an explicit authority.
    let has_authority = raw
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));

    has_authority && url.host_str().is_some_and(|host| !host.is_empty())
}

/// Returns true if `alias` is syntactically acceptable.
///
/// An empty alias is valid and means no alias was requested. Otherwise the
/// alias must be at most [`MAX_ALIAS_LENGTH`] characters and contain none of
/// `` !@#$%^&*()+={}[]|\`/?.>,<:;' ``. Route names are checked separately by
/// [`is_reserved_alias`].
pub fn validate_alias(alias: &str) -> bool {
    if alias.is_empty() {
        return true;
    }

    if alias.chars().count() > MAX_ALIAS_LENGTH {
        debug!(alias = %alias, "Rejected alias: too long");
        return false;
    }

    if let Some(found) = FORBIDDEN_ALIAS_CHARS.find(alias) {
        debug!(alias = %alias, character = %found.as_str(), "Rejected alias: forbidden character");
        return false;
    }

    true
}

/// Returns true if `alias` names one of the service's own routes and would
/// never be reached by a redirect.
pub fn is_reserved_alias(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}
