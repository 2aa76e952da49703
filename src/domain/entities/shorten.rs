//! Input and output of a shorten operation.

/// A request to shorten a URL, optionally under a user-chosen alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenRequest {
    pub original_url: String,
    pub alias: Option<String>,
}

impl ShortenRequest {
    /// Creates a new request. An empty alias is treated as no alias.
    pub fn new(original_url: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            original_url: original_url.into(),
            alias: alias.filter(|a| !a.is_empty()),
        }
    }
}

/// Result of a successful shorten operation.
///
/// `already_existed` only drives the message shown to the user; the
/// identifier is valid either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub identifier: String,
    pub already_existed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_alias_is_dropped() {
        let request = ShortenRequest::new("https://example.com", Some(String::new()));
        assert!(request.alias.is_none());
    }

    #[test]
    fn test_alias_is_kept_verbatim() {
        let request = ShortenRequest::new("https://example.com", Some(" my-alias".to_string()));
        assert_eq!(request.alias.as_deref(), Some(" my-alias"));
    }
}
