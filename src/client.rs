//! Core HTTP client for the Alpha Vantage query API.
//!
//! The [`AlphaVantageClient`] struct is the main entry point. It wraps
//! [`reqwest::Client`], appends the API key to every query, and maps
//! responses into typed results or [`QuoteError`]s.
//!
//! Endpoint methods are added to `AlphaVantageClient` via `impl` blocks in the
//! [`crate::api`] module.

use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::constants::{API_BASE_URL, QUERY_PATH};
use crate::error::{ApiMessage, QuoteError, Result};
use crate::types::time_series::QueryParams;

/// Core HTTP client for the Alpha Vantage query API.
///
/// The API key is held as a [`SecretString`] and only exposed when the query
/// URL is built. Request URLs are logged with the key redacted.
///
/// # Example
///
/// ```no_run
/// use quote_chart::client::AlphaVantageClient;
///
/// # #[tokio::main]
/// # async fn main() -> quote_chart::error::Result<()> {
/// let client = AlphaVantageClient::new("your-api-key")?;
/// // client.get_query::<serde_json::Value>(&params).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AlphaVantageClient {
    http: reqwest::Client,
    /// API key appended as `apikey=`.
    api_key: SecretString,
    /// Base URL for REST API requests (defaults to [`API_BASE_URL`]).
    base_url: Url,
}

impl AlphaVantageClient {
    /// Create a new client with the given API key.
    ///
    /// Uses the default API base URL (`https://www.alphavantage.co`).
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Create a new client pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl AsRef<str>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(api_key).with_base_url(base_url.as_ref()))
    }

    /// Create a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().default_headers(Self::default_headers());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(QuoteError::InvalidArgument(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        Ok(Self {
            http,
            api_key: SecretString::from(config.api_key.expose_secret().to_owned()),
            base_url,
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // URL building
    // -----------------------------------------------------------------------

    /// Full query URL for `params`, including the API key.
    pub fn query_url(&self, params: &QueryParams) -> Url {
        let mut url = self.endpoint_url();
        url.query_pairs_mut()
            .extend_pairs(params.query_pairs())
            .append_pair("apikey", self.api_key.expose_secret());
        url
    }

    /// Query URL with the API key replaced, for logging.
    pub fn redacted_url(&self, params: &QueryParams) -> Url {
        let mut url = self.endpoint_url();
        url.query_pairs_mut()
            .extend_pairs(params.query_pairs())
            .append_pair("apikey", "REDACTED");
        url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helper
    // -----------------------------------------------------------------------

    /// Perform a GET against the query endpoint and deserialize the JSON response.
    ///
    /// Alpha Vantage answers invalid calls and throttling with HTTP 200 and a
    /// message body. Those are returned as [`QuoteError::Api`].
    pub async fn get_query<R: DeserializeOwned>(&self, params: &QueryParams) -> Result<R> {
        params.validate()?;
        let url = self.query_url(params);
        tracing::debug!(url = %self.redacted_url(params), "GET");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn endpoint_url(&self) -> Url {
        let path = format!("{}{}", self.base_url.path().trim_end_matches('/'), QUERY_PATH);
        let mut url = self.base_url.clone();
        url.set_path(&path);
        url.set_query(None);
        url
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Read a response, returning either the deserialized body or a `QuoteError`.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(QuoteError::HttpStatus { status, body });
        }

        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        if let Some(msg) = ApiMessage::from_value(&value) {
            return Err(QuoteError::Api(msg));
        }
        serde_json::from_value(value).map_err(QuoteError::Json)
    }
}
