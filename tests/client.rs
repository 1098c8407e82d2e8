//! Client behaviour against a local one-shot HTTP server.
//!
//! Each test binds a listener on `127.0.0.1:0`, answers a single request
//! with a canned response, and hands back the request line it received.

use quote_chart::error::QuoteError;
use quote_chart::view::Outcome;
use quote_chart::{AlphaVantageClient, ChartView, Interval, MalformedClose, QueryParams};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const SERIES_BODY: &str = r#"{
    "Meta Data": { "2. Symbol": "AAPL", "4. Interval": "5min" },
    "Time Series (5min)": {
        "2024-01-01 09:35:00": { "4. close": "101.50" },
        "2024-01-01 09:30:00": { "4. close": "100.00" }
    }
}"#;

/// Serve one request with `status` and `body`. Resolves to the request line.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.expect("read");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();

        let request = String::from_utf8_lossy(&buf).into_owned();
        request.lines().next().unwrap_or_default().to_owned()
    });

    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn fetch_chart_projects_response() {
    let (base, server) = serve_once("200 OK", SERIES_BODY).await;
    let client = AlphaVantageClient::with_base_url("test-key", &base).unwrap();
    let params = QueryParams::intraday("AAPL", Interval::FiveMinutes);

    let series = client
        .fetch_chart(&params, MalformedClose::Keep)
        .await
        .expect("request should succeed")
        .expect("series expected");

    assert_eq!(series.labels(), ["2024-01-01 09:30:00", "2024-01-01 09:35:00"]);
    assert_eq!(series.values(), [100.00, 101.50]);

    let request_line = server.await.unwrap();
    assert_eq!(
        request_line,
        "GET /query?function=TIME_SERIES_INTRADAY&symbol=AAPL&interval=5min&apikey=test-key HTTP/1.1"
    );
}

#[tokio::test]
async fn missing_interval_key_is_ok_none() {
    let (base, server) = serve_once("200 OK", r#"{"Meta Data": {}}"#).await;
    let client = AlphaVantageClient::with_base_url("k", &base).unwrap();
    let params = QueryParams::intraday("AAPL", Interval::OneMinute);

    let result = client.fetch_chart(&params, MalformedClose::Keep).await.unwrap();
    assert!(result.is_none());
    server.await.unwrap();
}

#[tokio::test]
async fn provider_error_message_is_api_error() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"Error Message": "Invalid API call. Please retry or visit the documentation (https://www.alphavantage.co/documentation/) for TIME_SERIES_INTRADAY."}"#,
    )
    .await;
    let client = AlphaVantageClient::with_base_url("k", &base).unwrap();
    let params = QueryParams::intraday("NOPE", Interval::FiveMinutes);

    let err = client.get_time_series(&params).await.unwrap_err();
    match err {
        QuoteError::Api(msg) => assert!(msg.error_message.unwrap().starts_with("Invalid API call")),
        other => panic!("expected Api error, got {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn throttling_note_is_api_error() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#,
    )
    .await;
    let client = AlphaVantageClient::with_base_url("k", &base).unwrap();
    let params = QueryParams::intraday("AAPL", Interval::FiveMinutes);

    let err = client.get_time_series(&params).await.unwrap_err();
    assert!(matches!(err, QuoteError::Api(ref m) if m.note.is_some()));
    server.await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_http_status_error() {
    let (base, server) = serve_once("503 Service Unavailable", "upstream down").await;
    let client = AlphaVantageClient::with_base_url("k", &base).unwrap();
    let params = QueryParams::intraday("AAPL", Interval::FiveMinutes);

    match client.get_time_series(&params).await.unwrap_err() {
        QuoteError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_json_is_json_error() {
    let (base, server) = serve_once("200 OK", "{not json").await;
    let client = AlphaVantageClient::with_base_url("k", &base).unwrap();
    let params = QueryParams::intraday("AAPL", Interval::FiveMinutes);

    let err = client.get_time_series(&params).await.unwrap_err();
    assert!(matches!(err, QuoteError::Json(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn blank_symbol_sends_nothing() {
    let client = AlphaVantageClient::with_base_url("k", "http://127.0.0.1:9").unwrap();
    let params = QueryParams::intraday("", Interval::FiveMinutes);
    let err = client.get_time_series(&params).await.unwrap_err();
    assert!(matches!(err, QuoteError::InvalidArgument(_)));
}

#[tokio::test]
async fn view_submit_shows_then_clears() {
    let (base, server) = serve_once("200 OK", SERIES_BODY).await;
    let client = AlphaVantageClient::with_base_url("k", &base).unwrap();
    let mut view = ChartView::new();
    view.symbol = "AAPL".into();

    assert_eq!(view.submit(&client).await, Outcome::Shown(2));
    assert_eq!(view.chart().unwrap().label(), "Stock Prices for AAPL");
    server.await.unwrap();

    let (base, server) = serve_once("500 Internal Server Error", "").await;
    let client = AlphaVantageClient::with_base_url("k", &base).unwrap();
    assert!(matches!(view.submit(&client).await, Outcome::Failed(_)));
    assert!(view.chart().is_none());
    server.await.unwrap();
}

#[tokio::test]
async fn view_submit_without_symbol_is_invalid() {
    let client = AlphaVantageClient::with_base_url("k", "http://127.0.0.1:9").unwrap();
    let mut view = ChartView::new();
    assert!(matches!(view.submit(&client).await, Outcome::Invalid(_)));
    assert_eq!(view.latest_submission(), 0);
}
