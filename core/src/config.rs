//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::ApiError;

/// Public endpoint of the word API.
pub const DEFAULT_BASE_URL: &str = "https://api.wordnik.com/v4";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "WORDNIK_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "WORDNIK_BASE_URL";

/// Immutable settings for one client instance.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    /// Server address without a trailing `/`, e.g. `https://api.wordnik.com/v4`.
    pub base_url: String,
    /// Bound on the whole exchange. Expiry surfaces as a transport error.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `WORDNIK_API_KEY` and, optionally, `WORDNIK_BASE_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ApiError::InvalidArgument(format!("{API_KEY_ENV} is not set")))?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let config = Self::new(api_key, &base_url);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.api_key.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "api key cannot be empty".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "base url cannot be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::InvalidArgument(format!(
                "base url must start with http:// or https://, got {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
