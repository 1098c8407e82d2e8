//! Error types for the `quote-chart` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, QuoteError>`.
//!
//! [`QuoteError`] covers:
//! - **API errors** — Error or throttling notices Alpha Vantage returns inside a 200 body
//! - **HTTP status errors** — Unexpected status codes with response body
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **JSON errors** — Deserialization failures
//! - **URL errors** — Malformed URL construction
//! - **Invalid arguments** — Client-side validation errors
//! - **Configuration errors** — Missing or malformed environment settings
//!
//! A missing time series is *not* an error. The projector reports it as
//! `None`.

use std::fmt;

use crate::constants::fields;

/// Error or notice returned by Alpha Vantage in an otherwise successful response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ApiMessage {
    /// Invalid call, e.g. an unknown symbol.
    #[serde(rename = "Error Message", default)]
    pub error_message: Option<String>,
    /// Rate limiting notice.
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    /// Quota or premium-only notice.
    #[serde(rename = "Information", default)]
    pub information: Option<String>,
}

impl ApiMessage {
    /// Extract a provider message from a decoded payload, if it carries one.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        Self::from_object(value.as_object()?)
    }

    /// Extract a provider message from a top-level JSON object.
    pub fn from_object(obj: &serde_json::Map<String, serde_json::Value>) -> Option<Self> {
        let text = |key: &str| obj.get(key).and_then(|v| v.as_str()).map(str::to_owned);
        let msg = Self {
            error_message: text(fields::ERROR_MESSAGE),
            note: text(fields::NOTE),
            information: text(fields::INFORMATION),
        };
        msg.is_present().then_some(msg)
    }

    /// Whether any of the message fields is set.
    pub fn is_present(&self) -> bool {
        self.error_message.is_some() || self.note.is_some() || self.information.is_some()
    }
}

impl fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = &self.error_message {
            write!(f, "[error] {msg}")
        } else if let Some(msg) = &self.note {
            write!(f, "[note] {msg}")
        } else if let Some(msg) = &self.information {
            write!(f, "[information] {msg}")
        } else {
            f.write_str("[unknown] No message")
        }
    }
}

/// All possible errors produced by the `quote-chart` client.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// An error or notice returned by the Alpha Vantage API.
    #[error("API error: {0}")]
    Api(ApiMessage),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read from the environment.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_from_error_body() {
        let body = serde_json::json!({
            "Error Message": "Invalid API call. Please retry or visit the documentation."
        });
        let msg = ApiMessage::from_value(&body).expect("message expected");
        assert!(msg.error_message.is_some());
        assert!(msg.to_string().starts_with("[error]"));
    }

    #[test]
    fn api_message_absent_on_series_body() {
        let body = serde_json::json!({ "Time Series (5min)": {} });
        assert!(ApiMessage::from_value(&body).is_none());
    }

    #[test]
    fn note_displayed_when_no_error_message() {
        let msg: ApiMessage =
            serde_json::from_str(r#"{"Note": "Thank you for using Alpha Vantage!"}"#).unwrap();
        assert_eq!(msg.to_string(), "[note] Thank you for using Alpha Vantage!");
    }
}
