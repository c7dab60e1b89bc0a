mod api;
mod model;
mod wire;

pub use model::{ClosePair, DailyClose};

use crate::core::{AlertClient, AlertError};

/// How much history the market-data provider should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputSize {
    /// The latest ~100 daily points.
    #[default]
    Compact,
    /// The full available history.
    Full,
}

impl OutputSize {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

/// Fetches the two most recent daily closes for `symbol` in compact mode.
///
/// # Errors
///
/// See [`ClosesBuilder::fetch`].
pub async fn latest_closes(client: &AlertClient, symbol: &str) -> Result<ClosePair, AlertError> {
    ClosesBuilder::new(client, symbol).fetch().await
}

/// A builder for fetching the latest daily closing prices of a single symbol.
pub struct ClosesBuilder {
    client: AlertClient,
    symbol: String,
    output_size: OutputSize,
}

impl ClosesBuilder {
    /// Creates a new `ClosesBuilder` for a given symbol.
    pub fn new(client: &AlertClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            output_size: OutputSize::default(),
        }
    }

    /// Sets the amount of history requested from the provider.
    #[must_use]
    pub const fn output_size(mut self, size: OutputSize) -> Self {
        self.output_size = size;
        self
    }

    /// Executes the request and returns the two latest closes, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::InsufficientData`] when fewer than two daily entries come
    /// back, [`AlertError::Status`] on a non-2xx response, [`AlertError::Http`] on a
    /// transport failure, and [`AlertError::Data`] if a close is not a number.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<ClosePair, AlertError> {
        api::fetch_closes(&self.client, &self.symbol, self.output_size).await
    }
}
