use chrono::NaiveDate;
use serde::Serialize;

use crate::change::{self, PriceChange};
use crate::core::AlertError;

/// A single trading day's closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyClose {
    /// The trading day.
    pub date: NaiveDate,
    /// The closing price on that day.
    pub close: f64,
}

/// The two most recent daily closes for a symbol, most recent first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClosePair {
    /// The latest close ("yesterday").
    pub newer: DailyClose,
    /// The close before it ("the day before").
    pub older: DailyClose,
}

impl ClosePair {
    /// Percentage change and direction from `older` to `newer`.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::ZeroPrice`] if the older close is zero.
    pub fn change(&self) -> Result<PriceChange, AlertError> {
        change::calculate_price_change(self.newer.close, self.older.close)
    }

    /// Whether the move between the two closes reaches the alert threshold.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::ZeroPrice`] if the older close is zero.
    pub fn passes_threshold(&self) -> Result<bool, AlertError> {
        change::passes_threshold(self.newer.close, self.older.close)
    }
}
