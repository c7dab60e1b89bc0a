//! One alert run: fetch closes, gate on the move, notify with news.

use serde::Serialize;

use crate::change::{PriceChange, THRESHOLD, summary_message};
use crate::core::{AlertClient, AlertError};
use crate::news::NewsBuilder;
use crate::notify::Messenger;
use crate::stock::ClosesBuilder;

/// The instrument a run watches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watch {
    /// Ticker sent to the market-data provider, and shown in the summary.
    pub symbol: String,
    /// Free-text query sent to the news provider.
    pub company_name: String,
}

impl Watch {
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
        }
    }
}

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RunOutcome {
    /// The move stayed under the threshold; nothing was sent.
    BelowThreshold { change: PriceChange },
    /// The summary and `messages_sent - 1` articles went out.
    Notified {
        change: PriceChange,
        messages_sent: usize,
    },
}

/// Runs one alert pass for `watch`.
///
/// Steps run strictly in order and the first error ends the run. Messages already
/// submitted stay submitted: a news or relay failure after the summary leaves the
/// summary delivered.
///
/// # Errors
///
/// Any [`AlertError`] from the stock fetch, the change calculation, the news fetch
/// or a relay send.
#[tracing::instrument(skip(client, messenger), err, fields(symbol = %watch.symbol))]
pub async fn run(
    client: &AlertClient,
    messenger: &Messenger,
    watch: &Watch,
) -> Result<RunOutcome, AlertError> {
    let closes = ClosesBuilder::new(client, &watch.symbol).fetch().await?;
    let change = closes.change()?;

    tracing::info!(
        newer = closes.newer.close,
        newer_date = %closes.newer.date,
        older = closes.older.close,
        older_date = %closes.older.date,
        percent = change.percent,
        direction = ?change.direction,
        "price change computed"
    );

    if !closes.passes_threshold()? {
        tracing::info!(
            threshold_pct = THRESHOLD * 100.0,
            "move below threshold, no alert"
        );
        return Ok(RunOutcome::BelowThreshold { change });
    }

    messenger
        .send(&summary_message(&watch.symbol, &change))
        .await?;
    let mut messages_sent = 1;

    let articles = NewsBuilder::new(client, &watch.company_name).fetch().await?;
    tracing::info!(count = articles.len(), "news articles fetched");

    for article in &articles {
        messenger.send(&article.message()).await?;
        messages_sent += 1;
    }

    Ok(RunOutcome::Notified {
        change,
        messages_sent,
    })
}
