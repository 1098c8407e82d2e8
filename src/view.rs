//! Form and chart view state.
//!
//! [`ChartView`] holds what the selection form holds (ticker, interval,
//! series function) plus the chart currently on display. Submissions are
//! numbered; a response that arrives for an older submission is discarded,
//! so the latest *submission* wins rather than the latest response.

use crate::client::AlphaVantageClient;
use crate::error::Result;
use crate::projector::MalformedClose;
use crate::types::enums::{Interval, SeriesFunction};
use crate::types::time_series::{ChartSeries, QueryParams};

/// Ticket for one in-flight submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    seq: u64,
    params: QueryParams,
}

impl Submission {
    /// Query this submission was issued for.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Sequence number, increasing per submission.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What a completed submission did to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A chart with this many points is now shown.
    Shown(usize),
    /// The response had no series for the interval; the chart was cleared.
    NoData,
    /// The request failed; the chart was cleared.
    Failed(String),
    /// A newer submission exists; the response was ignored.
    Stale,
    /// The form is incomplete; nothing was sent and state is unchanged.
    Invalid(String),
}

/// Form fields plus the chart on display.
#[derive(Debug, Clone, Default)]
pub struct ChartView {
    /// Selected ticker. Empty until the user picks one.
    pub symbol: String,
    pub interval: Interval,
    pub function: SeriesFunction,
    /// How closes that are not decimals are projected.
    pub policy: MalformedClose,
    chart: Option<ChartSeries>,
    latest: u64,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chart on display, if any.
    pub fn chart(&self) -> Option<&ChartSeries> {
        self.chart.as_ref()
    }

    /// Sequence number of the most recent submission (0 before the first).
    pub fn latest_submission(&self) -> u64 {
        self.latest
    }

    /// Validate the form and issue a new submission ticket.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_submit(&mut self) -> Result<Submission> {
        let params = QueryParams {
            function: self.function,
            symbol: self.symbol.trim().to_owned(),
            interval: self.interval,
        };
        params.validate()?;

        self.latest += 1;
        tracing::info!(
            seq = self.latest,
            symbol = %params.symbol,
            interval = %params.interval,
            function = %params.function,
            "submitting"
        );
        Ok(Submission {
            seq: self.latest,
            params,
        })
    }

    /// Apply the result of a submission. Never fails: errors clear the chart
    /// and are logged.
    pub fn complete(
        &mut self,
        submission: Submission,
        result: Result<Option<ChartSeries>>,
    ) -> Outcome {
        if submission.seq != self.latest {
            tracing::debug!(
                seq = submission.seq,
                latest = self.latest,
                "discarding response for superseded submission"
            );
            return Outcome::Stale;
        }

        match result {
            Ok(Some(series)) => {
                let points = series.len();
                tracing::info!(seq = submission.seq, points, "chart updated");
                self.chart = Some(series);
                Outcome::Shown(points)
            }
            Ok(None) => {
                tracing::error!(
                    seq = submission.seq,
                    key = %submission.params.series_key(),
                    "no time series data found"
                );
                self.chart = None;
                Outcome::NoData
            }
            Err(e) => {
                tracing::error!(seq = submission.seq, error = %e, "error fetching data");
                self.chart = None;
                Outcome::Failed(e.to_string())
            }
        }
    }

    /// Submit the form through `client` and apply the response.
    pub async fn submit(&mut self, client: &AlphaVantageClient) -> Outcome {
        let submission = match self.begin_submit() {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "form not submitted");
                return Outcome::Invalid(e.to_string());
            }
        };
        let result = client.fetch_chart(submission.params(), self.policy).await;
        self.complete(submission, result)
    }
}
