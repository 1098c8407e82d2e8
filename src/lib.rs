//! # quote-chart
//!
//! Fetch intraday time series from [Alpha Vantage](https://www.alphavantage.co/documentation/)
//! and project the closing prices into a chart-ready series.
//!
//! ## Quick Start
//!
//! ```no_run
//! use quote_chart::{AlphaVantageClient, ClientConfig, Interval, MalformedClose, QueryParams};
//!
//! #[tokio::main]
//! async fn main() -> quote_chart::error::Result<()> {
//!     let client = AlphaVantageClient::from_config(&ClientConfig::from_env()?)?;
//!     let params = QueryParams::intraday("AAPL", Interval::FiveMinutes);
//!     if let Some(series) = client.fetch_chart(&params, MalformedClose::Keep).await? {
//!         println!("{}", quote_chart::render::line_chart(&series, 60, 12));
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod projector;
pub mod render;
pub mod types;
pub mod view;

/// Re-export the main client type at crate root for convenience.
pub use client::AlphaVantageClient;
pub use config::ClientConfig;
/// Re-export the error type and Result alias.
pub use error::{QuoteError, Result};
pub use projector::MalformedClose;
pub use types::enums::{Interval, SeriesFunction};
pub use types::time_series::{ChartSeries, QueryParams, TimeSeriesPayload};
pub use view::ChartView;
