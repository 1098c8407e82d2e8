//! Quote series projector.
//!
//! Turns a [`TimeSeriesPayload`] into a [`ChartSeries`]: resolves the series
//! key for the requested interval, restores chronological order and parses
//! the closing prices. A missing series is reported as `None`, never as an
//! error.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::types::enums::Interval;
use crate::types::time_series::{
    ChartSeries, QueryParams, SeriesLookup, TimeSeriesPayload, close_from_entry,
};

/// What to do with a record whose closing price is missing or not a decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedClose {
    /// Keep the point with a NaN value. Renderers show it as a gap.
    #[default]
    Keep,
    /// Drop the point from the series.
    Skip,
    /// Treat the whole payload as having no data.
    Reject,
}

/// Project the intraday series for `interval`.
///
/// Looks up `"Time Series ({interval})"`. Returns `None` when the key is
/// absent, `null` or not an object, or when `policy` is
/// [`MalformedClose::Reject`] and a close fails to parse.
pub fn project(
    payload: &TimeSeriesPayload,
    interval: Interval,
    symbol: &str,
    policy: MalformedClose,
) -> Option<ChartSeries> {
    project_key(payload, &interval.series_key(), symbol, policy)
}

/// Project the series that answers `params`, honouring its function.
pub fn project_query(
    payload: &TimeSeriesPayload,
    params: &QueryParams,
    policy: MalformedClose,
) -> Option<ChartSeries> {
    project_key(payload, &params.series_key(), params.symbol.trim(), policy)
}

/// Project the series stored under an explicit payload key.
pub fn project_key(
    payload: &TimeSeriesPayload,
    key: &str,
    symbol: &str,
    policy: MalformedClose,
) -> Option<ChartSeries> {
    let entries = match payload.series(key) {
        SeriesLookup::Present(entries) => entries,
        SeriesLookup::Absent => {
            tracing::debug!(
                key,
                available = ?payload.keys().collect::<Vec<_>>(),
                "series key not present in payload"
            );
            return None;
        }
        SeriesLookup::Malformed => {
            tracing::warn!(key, "series key present but not an object");
            return None;
        }
    };

    let mut points = Vec::with_capacity(entries.len());
    for (timestamp, record) in entries {
        let close = close_from_entry(record);
        match (close, policy) {
            (Some(value), _) => points.push((timestamp.clone(), value)),
            (None, MalformedClose::Keep) => points.push((timestamp.clone(), f64::NAN)),
            (None, MalformedClose::Skip) => {
                tracing::debug!(%timestamp, "skipping record with malformed close");
            }
            (None, MalformedClose::Reject) => {
                tracing::warn!(%timestamp, "rejecting payload: malformed close");
                return None;
            }
        }
    }

    // Provider order is newest first. Reverse pairs, not the two lists
    // separately, so label i and value i stay together.
    points.reverse();
    if !is_chronological(&points) {
        tracing::debug!(key, "provider order was not newest-first; sorting");
        points.sort_by(|a, b| compare_timestamps(&a.0, &b.0));
    }

    let series = ChartSeries::from_points(ChartSeries::label_for(symbol), points);
    if series.nan_count() > 0 {
        tracing::warn!(
            key,
            nan = series.nan_count(),
            "series contains closes that are not a number"
        );
    }
    tracing::debug!(key, points = series.len(), "projected series");
    Some(series)
}

fn is_chronological(points: &[(String, f64)]) -> bool {
    points
        .windows(2)
        .all(|w| compare_timestamps(&w[0].0, &w[1].0) != Ordering::Greater)
}

/// Order two provider timestamps by `(parsed, raw)`.
///
/// Labels that are not `YYYY-MM-DD[ HH:MM:SS]` sort before parsed ones and
/// among themselves by string. Equal instants (`2024-01-01` and
/// `2024-01-01 00:00:00`) tie-break by string, so this is a total order.
fn compare_timestamps(a: &str, b: &str) -> Ordering {
    (parse_timestamp(a), a).cmp(&(parse_timestamp(b), b))
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}
