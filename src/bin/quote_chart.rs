//! Command-line front end: pick a ticker and interval, fetch the intraday
//! series, and draw the closing prices.
//!
//! # Usage
//!
//! ```sh
//! export ALPHAVANTAGE_API_KEY="your-api-key"
//! cargo run --features cli -- --symbol AAPL --interval 5min
//! cargo run --features cli -- --list
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use quote_chart::types::symbols::{self, COMPANIES};
use quote_chart::view::Outcome;
use quote_chart::{
    AlphaVantageClient, ChartView, ClientConfig, Interval, MalformedClose, SeriesFunction,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Time series stock selection")]
struct Cli {
    /// Ticker to chart, e.g. AAPL. See --list for the offered companies.
    #[arg(short, long, required_unless_present = "list")]
    symbol: Option<String>,

    /// Sampling interval: 1min, 5min, 15min, 30min or 60min.
    #[arg(short, long, default_value = "5min")]
    interval: Interval,

    /// Series function: TIME_SERIES_INTRADAY or TIME_SERIES_DAILY.
    #[arg(short, long, default_value = "TIME_SERIES_INTRADAY")]
    function: SeriesFunction,

    /// How to treat closing prices that are not decimals.
    #[arg(long, value_enum, default_value_t = PolicyArg::Keep)]
    malformed: PolicyArg,

    /// Chart width in columns.
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Chart height in rows.
    #[arg(long, default_value_t = 16)]
    height: usize,

    /// Print the series as JSON instead of drawing it.
    #[arg(long)]
    json: bool,

    /// List the offered companies and exit.
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Keep,
    Skip,
    Reject,
}

impl From<PolicyArg> for MalformedClose {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Keep => Self::Keep,
            PolicyArg::Skip => Self::Skip,
            PolicyArg::Reject => Self::Reject,
        }
    }
}

#[tokio::main]
async fn main() -> quote_chart::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.list {
        for company in COMPANIES {
            println!("{:<6} {}", company.symbol, company.name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let symbol = cli.symbol.unwrap_or_default();
    if symbols::find(&symbol).is_none() {
        tracing::warn!(%symbol, "symbol is not in the offered list; querying anyway");
    }

    let config = ClientConfig::from_env()?;
    let client = AlphaVantageClient::from_config(&config)?;

    let mut view = ChartView::new();
    view.symbol = symbol;
    view.interval = cli.interval;
    view.function = cli.function;
    view.policy = cli.malformed.into();

    match view.submit(&client).await {
        Outcome::Shown(_) => {
            if let Some(series) = view.chart() {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(series)?);
                } else {
                    print!("{}", quote_chart::render::line_chart(series, cli.width, cli.height));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Invalid(reason) => {
            eprintln!("{reason}");
            Ok(ExitCode::from(2))
        }
        Outcome::NoData | Outcome::Failed(_) | Outcome::Stale => {
            eprintln!("No chart shown.");
            Ok(ExitCode::FAILURE)
        }
    }
}
