use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every variant is fatal to a run: nothing is retried and no partial result is
/// rolled back.
#[derive(Debug, Error)]
pub enum AlertError {
    /// A network or connection failure while talking to one of the providers.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A data provider returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, without its query string.
        url: String,
    },

    /// The market-data provider returned fewer than two daily closes.
    #[error("insufficient price data for {symbol}: expected 2 daily closes, found {found}{}", .detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default())]
    InsufficientData {
        /// The symbol that was requested.
        symbol: String,
        /// How many daily entries the response actually contained.
        found: usize,
        /// The provider's own explanation, when it sent one.
        detail: Option<String>,
    },

    /// The older closing price was zero, so no percentage change exists.
    #[error("cannot compute a percentage change from an older close of {older}")]
    ZeroPrice {
        /// The offending older close.
        older: f64,
    },

    /// The messaging relay refused a message.
    #[error("message delivery failed with status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Delivery {
        /// The HTTP status code returned by the relay.
        status: u16,
        /// The relay's error message, if any.
        message: Option<String>,
    },

    /// The data received from a provider was in an unexpected format.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A required setting is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
