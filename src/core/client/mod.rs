//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::AlertError;
use constants::{DEFAULT_BASE_MARKET, DEFAULT_BASE_NEWS, DEFAULT_BASE_RELAY, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared HTTP client for the market-data, news and messaging providers.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted. Each
/// request is independent, so the client has no teardown.
#[derive(Debug, Clone)]
pub struct AlertClient {
    http: Client,
    base_market: Url,
    base_news: Url,
    base_relay: Url,

    market_api_key: Option<String>,
    news_api_key: Option<String>,
}

impl AlertClient {
    /// Create a new builder.
    pub fn builder() -> AlertClientBuilder {
        AlertClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_market(&self) -> &Url {
        &self.base_market
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_relay(&self) -> &Url {
        &self.base_relay
    }

    pub(crate) fn market_api_key(&self) -> Result<&str, AlertError> {
        self.market_api_key
            .as_deref()
            .ok_or_else(|| AlertError::Config("no market-data API key configured".into()))
    }

    pub(crate) fn news_api_key(&self) -> Result<&str, AlertError> {
        self.news_api_key
            .as_deref()
            .ok_or_else(|| AlertError::Config("no news API key configured".into()))
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AlertClientBuilder {
    user_agent: Option<String>,
    base_market: Option<Url>,
    base_news: Option<Url>,
    base_relay: Option<Url>,

    market_api_key: Option<String>,
    news_api_key: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl AlertClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the market-data endpoint (e.g., `https://www.alphavantage.co/query`).
    pub fn base_market(mut self, url: Url) -> Self {
        self.base_market = Some(url);
        self
    }

    /// Override the news-search endpoint (e.g., `https://newsapi.org/v2/everything`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the messaging relay root (e.g., `https://api.twilio.com/2010-04-01/`).
    ///
    /// The path should end with `/` so the account path joins underneath it.
    pub fn base_relay(mut self, url: Url) -> Self {
        self.base_relay = Some(url);
        self
    }

    /// API key sent as `apikey` to the market-data provider.
    pub fn market_api_key(mut self, key: impl Into<String>) -> Self {
        self.market_api_key = Some(key.into());
        self
    }

    /// API key sent as `X-Api-Key` to the news provider.
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<AlertClient, AlertError> {
        let base_market = match self.base_market {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_MARKET)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_relay = match self.base_relay {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_RELAY)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(AlertClient {
            http,
            base_market,
            base_news,
            base_relay,
            market_api_key: self.market_api_key,
            news_api_key: self.news_api_key,
        })
    }
}
