//! Time Series endpoints — intraday and daily OHLCV series.

use crate::client::AlphaVantageClient;
use crate::error::Result;
use crate::projector::{self, MalformedClose};
use crate::types::time_series::*;

impl AlphaVantageClient {
    /// Retrieve the raw time-series payload for a query.
    ///
    /// The payload keeps the provider's entry order (newest first).
    ///
    /// **Endpoint:** `GET /query?function=TIME_SERIES_INTRADAY&symbol=..&interval=..`
    pub async fn get_time_series(&self, params: &QueryParams) -> Result<TimeSeriesPayload> {
        self.get_query(params).await
    }

    /// Fetch a series and project its closing prices into a [`ChartSeries`].
    ///
    /// Returns `Ok(None)` when the response carries no series for the
    /// requested interval. Transport, status and decode failures are errors.
    pub async fn fetch_chart(
        &self,
        params: &QueryParams,
        policy: MalformedClose,
    ) -> Result<Option<ChartSeries>> {
        let payload = self.get_time_series(params).await?;
        Ok(projector::project_query(&payload, params, policy))
    }
}
