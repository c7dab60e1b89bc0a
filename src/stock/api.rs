use crate::core::{AlertClient, AlertError, net};
use crate::stock::{
    OutputSize,
    model::{ClosePair, DailyClose},
    wire::DailyEnvelope,
};

pub(super) async fn fetch_closes(
    client: &AlertClient,
    symbol: &str,
    output_size: OutputSize,
) -> Result<ClosePair, AlertError> {
    let mut url = client.base_market().clone();
    url.query_pairs_mut()
        .append_pair("function", "TIME_SERIES_DAILY")
        .append_pair("symbol", symbol)
        .append_pair("outputsize", output_size.as_str())
        .append_pair("apikey", client.market_api_key()?);

    let resp = client.http().get(url).send().await?;
    let resp = net::ensure_success(resp)?;

    let body = net::get_text(resp, "time_series_daily").await?;
    decode_closes(symbol, &body)
}

fn decode_closes(symbol: &str, body: &str) -> Result<ClosePair, AlertError> {
    let envelope: DailyEnvelope = serde_json::from_str(body)?;
    let detail = envelope.provider_detail();
    let series = envelope.series.unwrap_or_default();

    // BTreeMap iterates oldest first; walk it backwards for most-recent-first.
    let mut latest = series.iter().rev().take(2);
    let (Some((newer_date, newer_bar)), Some((older_date, older_bar))) =
        (latest.next(), latest.next())
    else {
        return Err(AlertError::InsufficientData {
            symbol: symbol.to_string(),
            found: series.len(),
            detail,
        });
    };

    Ok(ClosePair {
        newer: DailyClose {
            date: *newer_date,
            close: parse_close(newer_date, &newer_bar.close)?,
        },
        older: DailyClose {
            date: *older_date,
            close: parse_close(older_date, &older_bar.close)?,
        },
    })
}

fn parse_close(date: &chrono::NaiveDate, raw: &str) -> Result<f64, AlertError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| AlertError::Data(format!("close for {date} is not a number ({raw:?}): {e}")))
}
