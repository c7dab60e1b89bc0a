#![allow(dead_code)]

use httpmock::{
    Method::{GET, POST},
    Mock, MockServer,
};
use serde_json::json;
use std::{fs, path::Path};
use stock_news_alert::{AlertClient, Channel, Messenger};
use url::Url;

pub const MARKET_KEY: &str = "av-test-key";
pub const NEWS_KEY: &str = "news-test-key";
pub const ACCOUNT_SID: &str = "AC123";
pub const AUTH_TOKEN: &str = "secret-token";
pub const SENDER: &str = "+14155238886";
pub const RECIPIENT: &str = "+15551234567";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose three providers all live on `server`.
pub fn client_for(server: &MockServer) -> AlertClient {
    AlertClient::builder()
        .base_market(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .base_news(Url::parse(&format!("{}/v2/everything", server.base_url())).unwrap())
        .base_relay(Url::parse(&format!("{}/2010-04-01/", server.base_url())).unwrap())
        .market_api_key(MARKET_KEY)
        .news_api_key(NEWS_KEY)
        .build()
        .unwrap()
}

pub fn messenger_for(client: &AlertClient, channel: Channel) -> Messenger {
    Messenger::new(client, ACCOUNT_SID, AUTH_TOKEN, SENDER, RECIPIENT, channel)
}

/// Daily series body with the given closes, most recent first, on consecutive weekdays.
pub fn daily_body(closes: &[f64]) -> String {
    let days = ["2024-11-08", "2024-11-07", "2024-11-06", "2024-11-05", "2024-11-04"];
    let mut series = serde_json::Map::new();
    for (day, close) in days.iter().zip(closes) {
        series.insert(
            (*day).to_string(),
            json!({ "1. open": "1.0000", "4. close": format!("{close:.4}"), "5. volume": "1000" }),
        );
    }
    json!({
        "Meta Data": { "2. Symbol": "TEST" },
        "Time Series (Daily)": series
    })
    .to_string()
}

pub fn mock_daily<'a>(server: &'a MockServer, symbol: &'a str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("symbol", symbol)
            .query_param("outputsize", "compact")
            .query_param("apikey", MARKET_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_news<'a>(server: &'a MockServer, query: &'a str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("language", "en")
            .query_param("q", query)
            .header("x-api-key", NEWS_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Accepts any message for the test account.
pub fn mock_relay(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Messages.json"));
        then.status(201)
            .header("content-type", "application/json")
            .body(fixture("relay", "message", "json"));
    })
}

/// Accepts exactly one message body, sent to the test recipient on `channel`.
pub fn mock_relay_body<'a>(server: &'a MockServer, channel: Channel, body: &str) -> Mock<'a> {
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("From", &channel.address(SENDER))
        .append_pair("To", &channel.address(RECIPIENT))
        .append_pair("Body", body)
        .finish();
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Messages.json"))
            .body(form);
        then.status(201)
            .header("content-type", "application/json")
            .body(fixture("relay", "message", "json"));
    })
}
