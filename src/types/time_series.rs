#![allow(missing_docs)]
//! Time-series types — query parameters, raw payload, chart series.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::fields;
use crate::error::{ApiMessage, QuoteError, Result};
use crate::types::enums::*;

// ---------------------------------------------------------------------------
// Query Parameters
// ---------------------------------------------------------------------------

/// Parameters of a single time-series query.
///
/// Sent as the query string of `GET /query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub function: SeriesFunction,
    /// Ticker, e.g. `AAPL` or `BRK.B`.
    pub symbol: String,
    pub interval: Interval,
}

impl QueryParams {
    /// Intraday query for `symbol` at `interval`.
    pub fn intraday(symbol: impl Into<String>, interval: Interval) -> Self {
        Self {
            function: SeriesFunction::TIME_SERIES_INTRADAY,
            symbol: symbol.into(),
            interval,
        }
    }

    /// Required-field check. The symbol must be non-blank.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(QuoteError::InvalidArgument("symbol is required".into()));
        }
        Ok(())
    }

    /// Payload key the requested series is returned under.
    pub fn series_key(&self) -> String {
        self.function.series_key(self.interval)
    }

    /// Query pairs excluding the API key, in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("function", self.function.as_str()),
            ("symbol", self.symbol.trim()),
        ];
        if self.function.uses_interval() {
            pairs.push(("interval", self.interval.as_str()));
        }
        pairs
    }
}

// ---------------------------------------------------------------------------
// Raw payload
// ---------------------------------------------------------------------------

/// Full response body of a time-series query.
///
/// Kept as an insertion-ordered JSON object so the provider's entry order
/// survives decoding. Series are reached through [`series`](Self::series),
/// which reports absence explicitly instead of handing back `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeriesPayload(pub Map<String, Value>);

impl TimeSeriesPayload {
    /// Wrap an arbitrary JSON value. Non-object values become an empty payload.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Look up a series by payload key.
    pub fn series(&self, key: &str) -> SeriesLookup<'_> {
        match self.0.get(key) {
            None | Some(Value::Null) => SeriesLookup::Absent,
            Some(Value::Object(entries)) => SeriesLookup::Present(entries),
            Some(_) => SeriesLookup::Malformed,
        }
    }

    /// Provider error or notice carried in the body, if any.
    pub fn api_message(&self) -> Option<ApiMessage> {
        ApiMessage::from_object(&self.0)
    }

    /// Top-level keys, in payload order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Result of a typed series lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesLookup<'a> {
    /// The key maps to a timestamp → record object.
    Present(&'a Map<String, Value>),
    /// The key is missing or `null`.
    Absent,
    /// The key is present but its value is not an object.
    Malformed,
}

/// One per-timestamp record of a time series, for typed access to the full
/// OHLCV record.
///
/// All fields are stringified decimals on the wire. The projector does not
/// go through this type; it reads only the close via [`close_from_entry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBar {
    #[serde(rename = "1. open", default)]
    pub open: Option<String>,
    #[serde(rename = "2. high", default)]
    pub high: Option<String>,
    #[serde(rename = "3. low", default)]
    pub low: Option<String>,
    #[serde(rename = "4. close", default)]
    pub close: Option<String>,
    #[serde(rename = "5. volume", default)]
    pub volume: Option<String>,
}

impl RawBar {
    /// Decode a record from a payload entry. Entries that are not records
    /// (or whose fields are not strings) yield `None`.
    pub fn from_entry(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    /// Closing price, or `None` when the field is missing or not a decimal.
    pub fn close_price(&self) -> Option<f64> {
        self.close.as_deref().and_then(parse_decimal)
    }
}

/// Closing price of one payload entry, read from the `4. close` field alone.
///
/// Accepts a stringified decimal (the wire format) or a JSON number. Other
/// fields of the record are not looked at. `None` when the field is missing,
/// not a decimal, or the entry is not a record.
pub fn close_from_entry(value: &Value) -> Option<f64> {
    match value.get(fields::CLOSE)? {
        Value::String(s) => parse_decimal(s),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Parse a stringified decimal. No locale or currency handling.
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Chart Series
// ---------------------------------------------------------------------------

/// Chronologically ordered `(timestamp, close)` pairs plus a display label.
///
/// `labels()` and `values()` always have the same length and index `i` in
/// both refers to the same timestamp. Deserialization rejects input that
/// breaks this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChartSeries")]
pub struct ChartSeries {
    label: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

/// Unchecked wire shape of [`ChartSeries`].
#[derive(Deserialize)]
struct RawChartSeries {
    label: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<RawChartSeries> for ChartSeries {
    type Error = QuoteError;

    fn try_from(raw: RawChartSeries) -> Result<Self> {
        if raw.labels.len() != raw.values.len() {
            return Err(QuoteError::InvalidArgument(format!(
                "chart series has {} labels but {} values",
                raw.labels.len(),
                raw.values.len()
            )));
        }
        Ok(Self {
            label: raw.label,
            labels: raw.labels,
            values: raw.values,
        })
    }
}

impl ChartSeries {
    /// Build a series from already-ordered points.
    pub fn from_points(label: impl Into<String>, points: Vec<(String, f64)>) -> Self {
        let (labels, values) = points.into_iter().unzip();
        Self {
            label: label.into(),
            labels,
            values,
        }
    }

    /// Display label for `symbol`.
    pub fn label_for(symbol: &str) -> String {
        format!("Stock Prices for {symbol}")
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Timestamp labels, oldest first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Closing prices, aligned with [`labels`](Self::labels).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(label, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Minimum and maximum of the finite values.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Number of values that are not a number.
    pub fn nan_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn lookup_distinguishes_absent_null_and_malformed() {
        let payload = TimeSeriesPayload::from_value(json!({
            "Time Series (1min)": null,
            "Time Series (5min)": {},
            "Time Series (15min)": [1, 2],
        }));
        assert_eq!(payload.series("Time Series (1min)"), SeriesLookup::Absent);
        assert_eq!(payload.series("Time Series (30min)"), SeriesLookup::Absent);
        assert!(matches!(payload.series("Time Series (5min)"), SeriesLookup::Present(m) if m.is_empty()));
        assert_eq!(payload.series("Time Series (15min)"), SeriesLookup::Malformed);
    }

    #[test]
    fn non_object_payload_is_empty() {
        let payload = TimeSeriesPayload::from_value(json!("oops"));
        assert_eq!(payload.keys().count(), 0);
    }

    #[test]
    fn raw_bar_fields() {
        let bar = RawBar::from_entry(&json!({
            "1. open": "100.0",
            "2. high": "102.0",
            "3. low": "99.5",
            "4. close": " 101.25 ",
            "5. volume": "1200"
        }))
        .unwrap();
        assert_eq!(bar.close_price(), Some(101.25));
        assert_eq!(bar.volume.as_deref(), Some("1200"));
    }

    #[test]
    fn raw_bar_missing_or_bad_close() {
        assert_eq!(RawBar::from_entry(&json!({})).unwrap().close_price(), None);
        assert_eq!(
            RawBar::from_entry(&json!({"4. close": "abc"})).unwrap().close_price(),
            None
        );
        assert!(RawBar::from_entry(&json!({"4. close": 12})).is_none());
    }

    #[test]
    fn close_read_without_other_fields() {
        let entry = json!({ "1. open": 100, "4. close": "101.50", "5. volume": 1200 });
        assert_eq!(close_from_entry(&entry), Some(101.5));
        assert!(RawBar::from_entry(&entry).is_none());
    }

    #[test]
    fn close_accepts_json_number() {
        assert_eq!(close_from_entry(&json!({ "4. close": 101.5 })), Some(101.5));
        assert_eq!(close_from_entry(&json!({ "4. close": "abc" })), None);
        assert_eq!(close_from_entry(&json!({ "4. close": null })), None);
        assert_eq!(close_from_entry(&json!({ "1. open": "1" })), None);
        assert_eq!(close_from_entry(&json!("101.5")), None);
    }

    #[test]
    fn chart_series_deserialize_checks_lengths() {
        let err = serde_json::from_value::<ChartSeries>(json!({
            "label": "x",
            "labels": ["a", "b"],
            "values": [1.0]
        }));
        assert!(err.is_err());

        let series: ChartSeries = serde_json::from_value(json!({
            "label": "x",
            "labels": ["a", "b"],
            "values": [1.0, 2.0]
        }))
        .unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn query_pairs_for_intraday_and_daily() {
        let mut params = QueryParams::intraday(" AAPL ", Interval::FifteenMinutes);
        assert_eq!(
            params.query_pairs(),
            vec![
                ("function", "TIME_SERIES_INTRADAY"),
                ("symbol", "AAPL"),
                ("interval", "15min"),
            ]
        );
        params.function = SeriesFunction::TIME_SERIES_DAILY;
        assert_eq!(params.query_pairs().len(), 2);
        assert_eq!(params.series_key(), "Time Series (Daily)");
    }

    #[test]
    fn blank_symbol_rejected() {
        let params = QueryParams::intraday("  ", Interval::default());
        assert!(matches!(params.validate(), Err(QuoteError::InvalidArgument(_))));
    }

    #[test]
    fn chart_series_range_skips_nan() {
        let series = ChartSeries::from_points(
            "x",
            vec![("a".into(), 3.0), ("b".into(), f64::NAN), ("c".into(), 1.0)],
        );
        assert_eq!(series.range(), Some((1.0, 3.0)));
        assert_eq!(series.nan_count(), 1);
        assert_eq!(series.labels().len(), series.values().len());
    }
}
