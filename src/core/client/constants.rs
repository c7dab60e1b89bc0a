//! Centralized constants for default endpoints and UA.

/// Identifies this crate to the providers. NewsAPI rejects requests without a UA.
pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint (all functions share it).
pub(crate) const DEFAULT_BASE_MARKET: &str = "https://www.alphavantage.co/query";

/// NewsAPI "everything" search endpoint.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/everything";

/// Twilio REST API root (`Accounts/{sid}/Messages.json` is joined onto it).
pub(crate) const DEFAULT_BASE_RELAY: &str = "https://api.twilio.com/2010-04-01/";
