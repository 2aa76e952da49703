//! URL shortening and redirect resolution service.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::{ShortenOutcome, ShortenRequest, UrlRecord};
use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;
use crate::utils::code_generator::{IdStrategy, generate_identifier};
use crate::utils::validation::{is_reserved_alias, validate_alias, validate_url};

/// Default name of the original URL → identifier table.
pub const DEFAULT_FORWARD_TABLE: &str = "original:to:short";
/// Default name of the identifier → URL record table.
pub const DEFAULT_REVERSE_TABLE: &str = "short:to:original";
/// Default prefix prepended to identifiers to build public short URLs.
pub const DEFAULT_DOMAIN: &str = "http://localhost:8080/";

/// Maximum number of generated identifiers tried before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Settings the shortener is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenerConfig {
    /// Prefix of public short URLs, e.g. `https://sho.rt/`.
    pub domain: String,
    /// Forward index table name.
    pub forward_table: String,
    /// Reverse index table name.
    pub reverse_table: String,
    /// Identifier strategy for requests without an alias.
    pub id_strategy: IdStrategy,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            forward_table: DEFAULT_FORWARD_TABLE.to_string(),
            reverse_table: DEFAULT_REVERSE_TABLE.to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

/// Service for creating short identifiers and resolving them back.
///
/// Keeps two tables in sync through the injected [`KeyValueStore`]:
/// the forward index makes shortening idempotent per original URL, the
/// reverse index resolves redirects and guards identifier uniqueness.
///
/// # Consistency
///
/// The reverse index is written before the forward index and the two
/// writes are not atomic. A failure between them leaves a reverse entry
/// with no forward entry; concurrent requests for the same new URL may
/// both write, and the last forward write wins.
pub struct ShortenerService<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    config: ShortenerConfig,
}

impl<S: KeyValueStore + ?Sized> ShortenerService<S> {
    /// Creates a new shortener over `store`.
    pub fn new(store: Arc<S>, config: ShortenerConfig) -> Self {
        Self { store, config }
    }

    /// Returns the configuration the service was built with.
    pub fn config(&self) -> &ShortenerConfig {
        &self.config
    }

    /// Shortens `request.original_url`, optionally under `request.alias`.
    ///
    /// # Flow
    ///
    /// 1. Validate the request (no store access on failure)
    /// 2. Forward index hit → return the existing identifier, `already_existed = true`
    /// 3. Alias given → it becomes the identifier unless the reverse index has it
    /// 4. No alias → generate an identifier not present in the reverse index
    /// 5. Write the URL record to the reverse index, then the identifier to the forward index
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyUrlField`], [`AppError::InvalidUrl`], [`AppError::InvalidAlias`]
    ///   on invalid input
    /// - [`AppError::AliasAlreadyExists`] if the alias is taken
    /// - [`AppError::StoreUnavailable`] / [`AppError::Serialization`] on backend failures
    /// - [`AppError::IdentifierExhausted`] if every generated candidate collided
    pub async fn shorten(&self, request: ShortenRequest) -> Result<ShortenOutcome, AppError> {
        check_request(&request)?;

        let original_url = request.original_url;
        let forward = &self.config.forward_table;
        let reverse = &self.config.reverse_table;

        let existing = self
            .store
            .hash_get(forward, &original_url)
            .await
            .inspect_err(|e| {
                error!(table = %forward, url = %original_url, error = %e, "Forward index lookup failed")
            })?;

        if let Some(identifier) = existing {
            info!(url = %original_url, identifier = %identifier, "Short URL already exists");
            return Ok(ShortenOutcome {
                identifier,
                already_existed: true,
            });
        }

        let identifier = match &request.alias {
            Some(alias) => {
                if self.identifier_taken(alias).await? {
                    error!(alias = %alias, "Alias already exists");
                    return Err(AppError::AliasAlreadyExists {
                        alias: alias.clone(),
                    });
                }
                alias.clone()
            }
            None => self.generate_unique_identifier(&original_url).await?,
        };

        let record = UrlRecord::new(original_url.clone(), request.alias);
        let payload = record.to_json().inspect_err(|e| {
            error!(record = ?record, error = %e, "Failed to serialize URL record")
        })?;

        self.store
            .hash_set(reverse, &identifier, &payload)
            .await
            .inspect_err(|e| {
                error!(table = %reverse, identifier = %identifier, error = %e, "Failed to store URL record")
            })?;

        self.store
            .hash_set(forward, &original_url, &identifier)
            .await
            .inspect_err(|e| {
                error!(
                    table = %forward,
                    url = %original_url,
                    identifier = %identifier,
                    error = %e,
                    "Failed to store forward mapping"
                )
            })?;

        info!(url = %original_url, identifier = %identifier, "Shortened URL");

        Ok(ShortenOutcome {
            identifier,
            already_existed: false,
        })
    }

    /// Resolves `identifier` to its original URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::OriginalUrlNotFound`] if the identifier is unknown
    /// - [`AppError::StoreUnavailable`] / [`AppError::Serialization`] on backend failures
    pub async fn redirect(&self, identifier: &str) -> Result<String, AppError> {
        let reverse = &self.config.reverse_table;

        let raw = self
            .store
            .hash_get(reverse, identifier)
            .await
            .inspect_err(|e| {
                error!(table = %reverse, identifier = %identifier, error = %e, "Reverse index lookup failed")
            })?
            .ok_or_else(|| AppError::OriginalUrlNotFound {
                identifier: identifier.to_string(),
            })?;

        let record = UrlRecord::from_json(&raw).inspect_err(|e| {
            error!(identifier = %identifier, error = %e, "Stored URL record is malformed")
        })?;

        debug!(identifier = %identifier, url = %record.original_url, "Resolved identifier");
        Ok(record.original_url)
    }

    /// Builds the public short URL for `identifier`.
    ///
    /// The configured domain is used verbatim as a prefix, so it should
    /// carry its own trailing `/`.
    pub fn short_url(&self, identifier: &str) -> String {
        format!("{}{}", self.config.domain, identifier)
    }

    /// Checks whether the underlying store is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }

    /// Returns true if `identifier` already has an entry in the reverse index.
    async fn identifier_taken(&self, identifier: &str) -> Result<bool, AppError> {
        let reverse = &self.config.reverse_table;

        let existing = self
            .store
            .hash_get(reverse, identifier)
            .await
            .inspect_err(|e| {
                error!(table = %reverse, identifier = %identifier, error = %e, "Reverse index lookup failed")
            })?;

        Ok(existing.is_some())
    }

    /// Generates an identifier that is not yet in the reverse index.
    ///
    /// Attempts up to 10 candidates before failing.
    async fn generate_unique_identifier(&self, original_url: &str) -> Result<String, AppError> {
        for attempt in 0..MAX_ATTEMPTS {
            let candidate = generate_identifier(self.config.id_strategy, original_url, attempt);

            if !self.identifier_taken(&candidate).await? {
                return Ok(candidate);
            }

            debug!(identifier = %candidate, attempt, "Generated identifier collides, retrying");
        }

        error!(url = %original_url, "Failed to generate unique identifier");
        Err(AppError::IdentifierExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}

/// Rejects malformed requests before any store access.
fn check_request(request: &ShortenRequest) -> Result<(), AppError> {
    if request.original_url.is_empty() {
        return Err(AppError::EmptyUrlField);
    }

    if !validate_url(&request.original_url) {
        return Err(AppError::InvalidUrl);
    }

    if let Some(alias) = &request.alias
        && (!validate_alias(alias) || is_reserved_alias(alias))
    {
        return Err(AppError::InvalidAlias);
    }

    Ok(())
}
