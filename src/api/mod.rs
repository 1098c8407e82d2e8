//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`AlphaVantageClient`](crate::client::AlphaVantageClient) via `impl`
//! blocks. All methods handle query building, HTTP transport, and error
//! mapping automatically.
//!
//! ## Usage
//!
//! ```no_run
//! use quote_chart::{AlphaVantageClient, Interval, MalformedClose, QueryParams};
//!
//! # #[tokio::main]
//! # async fn main() -> quote_chart::Result<()> {
//! let client = AlphaVantageClient::new("api-key")?;
//! let params = QueryParams::intraday("AAPL", Interval::FiveMinutes);
//! let payload = client.get_time_series(&params).await?;
//! let chart = client.fetch_chart(&params, MalformedClose::Keep).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`time_series`] | 2 | Raw time series, projected chart series |

pub mod time_series;
