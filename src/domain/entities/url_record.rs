//! URL record entity stored in the reverse index.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

/// The value persisted under an identifier in the reverse index.
///
/// Serialized as JSON with the field names `originalURL` and `alias`.
/// A missing alias is written as an empty string and read back as `None`,
/// so records created without an alias keep the same shape as aliased ones.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    #[serde(rename = "originalURL")]
    pub original_url: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub alias: Option<String>,
}

impl UrlRecord {
    /// Creates a new record.
    pub fn new(original_url: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            original_url: original_url.into(),
            alias,
        }
    }

    /// Serializes the record into its stored JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a record from its stored JSON form.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
