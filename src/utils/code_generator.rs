//! Identifier generation for short URLs.
//!
//! Two strategies produce 12-character URL-safe base64 identifiers:
//! a deterministic one derived from the original URL and a random one.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Length of raw bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 9;

/// How identifiers are produced for requests without an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// SHA-256 of the original URL; the same URL yields the same identifier.
    #[default]
    Hashed,
    /// OS randomness; independent of the input.
    Random,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hashed" => Ok(Self::Hashed),
            "random" => Ok(Self::Random),
            other => Err(format!(
                "ID_STRATEGY must be 'hashed' or 'random', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Hashed => write!(f, "hashed"),
            Self::Random => write!(f, "random"),
        }
    }
}

/// Produces an identifier for `original_url`.
///
/// `attempt` is the zero-based retry counter used after a collision. The
/// hashed strategy mixes it into the digest so every retry yields a new
/// candidate; the random strategy ignores it.
pub fn generate_identifier(strategy: IdStrategy, original_url: &str, attempt: usize) -> String {
    match strategy {
        IdStrategy::Hashed => hashed_code(original_url, attempt),
        IdStrategy::Random => generate_code(),
    }
}

/// Derives a code from the SHA-256 digest of `input`.
pub fn hashed_code(input: &str, attempt: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    if attempt > 0 {
        hasher.update(attempt.to_be_bytes());
    }
    let digest = hasher.finalize();

    URL_SAFE_NO_PAD.encode(&digest[..CODE_LENGTH_BYTES])
}

/// Generates a cryptographically secure random code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    URL_SAFE_NO_PAD.encode(buffer)
}
