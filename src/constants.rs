//! Constants for the Alpha Vantage query API.
//!
//! Contains the base URL, the query path, and the field names used by the
//! time-series payloads. These are used internally by
//! [`AlphaVantageClient`](crate::client::AlphaVantageClient) and the
//! [`projector`](crate::projector), but are also exported for advanced usage.

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the Alpha Vantage REST API.
pub const API_BASE_URL: &str = "https://www.alphavantage.co";

/// Path of the single query endpoint every function is served from.
pub const QUERY_PATH: &str = "/query";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ALPHAVANTAGE_API_KEY";

/// Environment variable overriding [`API_BASE_URL`].
pub const ENV_BASE_URL: &str = "ALPHAVANTAGE_BASE_URL";

/// Environment variable setting a request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "ALPHAVANTAGE_TIMEOUT_SECS";

// ---------------------------------------------------------------------------
// Payload field names
// ---------------------------------------------------------------------------

/// Payload field names used by the time-series functions.
pub mod fields {
    /// Prefix of the series key. The full key is `"Time Series ({interval})"`.
    pub const TIME_SERIES_PREFIX: &str = "Time Series";

    /// Metadata block present on successful responses.
    pub const META_DATA: &str = "Meta Data";

    pub const OPEN: &str = "1. open";
    pub const HIGH: &str = "2. high";
    pub const LOW: &str = "3. low";
    /// Closing price within each per-timestamp record.
    pub const CLOSE: &str = "4. close";
    pub const VOLUME: &str = "5. volume";

    /// Error text returned with HTTP 200 for bad parameters.
    pub const ERROR_MESSAGE: &str = "Error Message";
    /// Throttling notice returned with HTTP 200.
    pub const NOTE: &str = "Note";
    /// Informational notice (premium endpoints, daily quota) returned with HTTP 200.
    pub const INFORMATION: &str = "Information";
}
