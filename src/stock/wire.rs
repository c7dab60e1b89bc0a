use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub(crate) struct DailyEnvelope {
    #[serde(rename = "Time Series (Daily)", default)]
    pub(crate) series: Option<BTreeMap<NaiveDate, DailyBar>>,

    // Alpha Vantage answers 200 with one of these instead of a series when it
    // rejects the symbol, throttles the key, or wants a premium plan.
    #[serde(rename = "Error Message", default)]
    pub(crate) error_message: Option<String>,
    #[serde(rename = "Note", default)]
    pub(crate) note: Option<String>,
    #[serde(rename = "Information", default)]
    pub(crate) information: Option<String>,
}

impl DailyEnvelope {
    pub(crate) fn provider_detail(&self) -> Option<String> {
        self.error_message
            .clone()
            .or_else(|| self.note.clone())
            .or_else(|| self.information.clone())
    }
}

#[derive(Deserialize)]
pub(crate) struct DailyBar {
    #[serde(rename = "4. close")]
    pub(crate) close: String,
}
