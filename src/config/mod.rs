//! Configuration handling for the pipeline.
//!
//! The pipeline itself is a set of pure functions; the only tunables are
//! the oversized-content guard and the feed cache lifetime. Both read
//! from the environment with sensible defaults so embedding applications
//! can run without any setup.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Environment variable names. Keeping them public lets embedding code
/// (tests, launcher settings plumbing) refer to them directly.
pub const ENV_MAX_CONTENT_LEN: &str = "GAZETTE_MAX_CONTENT_LEN";
pub const ENV_CACHE_TTL_SECS: &str = "GAZETTE_CACHE_TTL_SECS";

/// Default values used when environment variables are absent.
///
/// The content cap bounds worst-case parser time on adversarially large
/// payloads; real feed items are a few KiB.
const DEFAULT_MAX_CONTENT_LEN: usize = 64 * 1024;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Runtime configuration for feed processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    max_content_len: usize,
    cache_ttl: Duration,
}

impl Config {
    /// Create a config explicitly.
    pub fn new(max_content_len: usize, cache_ttl: Duration) -> Self {
        Self {
            max_content_len,
            cache_ttl,
        }
    }

    /// Load from environment variables, falling back to defaults.
    ///
    /// Fails only when a variable is present but not parseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_content_len = match env::var(ENV_MAX_CONTENT_LEN) {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_MAX_CONTENT_LEN,
                reason: format!("expected a byte count, got '{value}'"),
            })?,
            Err(_) => DEFAULT_MAX_CONTENT_LEN,
        };
        let cache_ttl_secs: u64 = match env::var(ENV_CACHE_TTL_SECS) {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_CACHE_TTL_SECS,
                reason: format!("expected seconds, got '{value}'"),
            })?,
            Err(_) => DEFAULT_CACHE_TTL_SECS,
        };
        Ok(Self {
            max_content_len,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }

    /// Maximum accepted `rawContent` length in bytes; larger payloads are
    /// rejected instead of sanitized.
    pub fn max_content_len(&self) -> usize {
        self.max_content_len
    }
    /// How long assembled feed entries stay fresh in a [`crate::feed::NewsCache`].
    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// Defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        // not a `Default` impl yet to keep explicit semantics
        Self::new(
            DEFAULT_MAX_CONTENT_LEN,
            Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        )
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
