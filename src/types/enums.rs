//! Shared enum types that map directly to Alpha Vantage query string values.
//!
//! Function variant names use `SCREAMING_SNAKE_CASE` to match the wire
//! format, so we suppress the Rust naming convention lint.
#![allow(non_camel_case_types)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::fields::TIME_SERIES_PREFIX;
use crate::error::QuoteError;

// ---------------------------------------------------------------------------
// Series Function
// ---------------------------------------------------------------------------

/// The `function` query parameter selecting which time series to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesFunction {
    /// Intraday bars at one of the [`Interval`] granularities.
    #[default]
    TIME_SERIES_INTRADAY,
    /// One bar per trading day. The interval is not sent.
    TIME_SERIES_DAILY,
}

impl SeriesFunction {
    /// Wire name sent as `function=`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TIME_SERIES_INTRADAY => "TIME_SERIES_INTRADAY",
            Self::TIME_SERIES_DAILY => "TIME_SERIES_DAILY",
        }
    }

    /// Whether requests for this function carry an `interval` parameter.
    pub fn uses_interval(self) -> bool {
        matches!(self, Self::TIME_SERIES_INTRADAY)
    }

    /// Payload key the series is returned under.
    pub fn series_key(self, interval: Interval) -> String {
        match self {
            Self::TIME_SERIES_INTRADAY => interval.series_key(),
            Self::TIME_SERIES_DAILY => format!("{TIME_SERIES_PREFIX} (Daily)"),
        }
    }
}

impl fmt::Display for SeriesFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesFunction {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TIME_SERIES_INTRADAY" | "INTRADAY" => Ok(Self::TIME_SERIES_INTRADAY),
            "TIME_SERIES_DAILY" | "DAILY" => Ok(Self::TIME_SERIES_DAILY),
            other => Err(QuoteError::InvalidArgument(format!(
                "unknown series function: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// Sampling granularity for intraday series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1min")]
    OneMinute,
    #[default]
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "60min")]
    SixtyMinutes,
}

impl Interval {
    /// Every supported interval, shortest first.
    pub const ALL: [Interval; 5] = [
        Self::OneMinute,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::SixtyMinutes,
    ];

    /// Wire value sent as `interval=`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::SixtyMinutes => "60min",
        }
    }

    /// Bar length in minutes.
    pub fn minutes(self) -> u32 {
        match self {
            Self::OneMinute => 1,
            Self::FiveMinutes => 5,
            Self::FifteenMinutes => 15,
            Self::ThirtyMinutes => 30,
            Self::SixtyMinutes => 60,
        }
    }

    /// Payload key of an intraday series at this interval, e.g. `"Time Series (5min)"`.
    pub fn series_key(self) -> String {
        format!("{TIME_SERIES_PREFIX} ({})", self.as_str())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                QuoteError::InvalidArgument(format!(
                    "unknown interval {s:?} (expected one of 1min, 5min, 15min, 30min, 60min)"
                ))
            })
    }
}
