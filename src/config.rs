//! Client configuration.
//!
//! The API key is supplied at runtime and held as a [`SecretString`] so it
//! never ends up in logs or `Debug` output.

use std::time::Duration;

use secrecy::SecretString;

use crate::constants::{API_BASE_URL, ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_SECS};
use crate::error::{QuoteError, Result};

/// Settings used to construct an [`AlphaVantageClient`](crate::AlphaVantageClient).
#[derive(Debug)]
pub struct ClientConfig {
    /// Alpha Vantage API key.
    pub api_key: SecretString,
    /// Base URL for REST requests (defaults to [`API_BASE_URL`]).
    pub base_url: String,
    /// Optional whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build a configuration with the default base URL and no timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: API_BASE_URL.to_owned(),
            timeout: None,
        }
    }

    /// Read the configuration from process environment variables.
    ///
    /// | Variable | Required | Meaning |
    /// |---|---|---|
    /// | `ALPHAVANTAGE_API_KEY` | yes | API key |
    /// | `ALPHAVANTAGE_BASE_URL` | no | Override the API host |
    /// | `ALPHAVANTAGE_TIMEOUT_SECS` | no | Request timeout in seconds |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| QuoteError::Config(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(api_key.trim());

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config.base_url = base_url.trim().to_owned();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                QuoteError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Replace the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
