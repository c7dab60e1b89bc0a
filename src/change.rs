//! Percentage change between two closes and the threshold gate in front of alerts.

use serde::Serialize;
use std::fmt;

use crate::core::AlertError;

/// Minimum absolute fractional move (5%) that triggers an alert. Inclusive.
pub const THRESHOLD: f64 = 0.05;

/// Which way the price moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    /// Also used for an unchanged price.
    Down,
}

impl Direction {
    /// The arrow shown in the summary message.
    pub const fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "\u{25B2}",
            Direction::Down => "\u{25BC}",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arrow())
    }
}

/// Magnitude and direction of a move between two closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceChange {
    /// Absolute change in percent, always `>= 0`.
    pub percent: f64,
    pub direction: Direction,
}

fn fraction(newer: f64, older: f64) -> Result<f64, AlertError> {
    let f = (newer - older) / older;
    if older == 0.0 || !f.is_finite() {
        return Err(AlertError::ZeroPrice { older });
    }
    Ok(f)
}

/// Computes `(newer - older) / older * 100` as a magnitude plus direction.
///
/// The direction is [`Direction::Up`] only for a strictly positive change; equal
/// prices report [`Direction::Down`].
///
/// # Errors
///
/// Returns [`AlertError::ZeroPrice`] when `older` is zero.
pub fn calculate_price_change(newer: f64, older: f64) -> Result<PriceChange, AlertError> {
    let pct = fraction(newer, older)? * 100.0;
    let direction = if pct > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    Ok(PriceChange {
        percent: pct.abs(),
        direction,
    })
}

/// True when `abs((newer - older) / older) >= THRESHOLD`.
///
/// # Errors
///
/// Returns [`AlertError::ZeroPrice`] when `older` is zero.
pub fn passes_threshold(newer: f64, older: f64) -> Result<bool, AlertError> {
    Ok(fraction(newer, older)?.abs() >= THRESHOLD)
}

/// The summary line sent first, e.g. `RIVN: ▲ 5.26%` or `RIVN: ▼ 10.0%`.
///
/// The percent is rounded to two decimals without trailing zeros, keeping at least
/// one decimal digit.
pub fn summary_message(symbol: &str, change: &PriceChange) -> String {
    format!("{symbol}: {} {}%", change.direction, round_percent(change.percent))
}

fn round_percent(percent: f64) -> String {
    let fixed = format!("{percent:.2}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
