//! Run settings, loaded once at start-up.

use std::time::Duration;

use crate::alert::Watch;
use crate::core::{AlertClient, AlertError};
use crate::notify::{Channel, Messenger};

/// Symbol watched when `STOCK_SYMBOL` is unset.
pub const DEFAULT_SYMBOL: &str = "RIVN";
/// Company searched for news when `COMPANY_NAME` is unset.
pub const DEFAULT_COMPANY: &str = "Rivian";

/// Everything a run needs: what to watch, provider keys, and relay addressing.
#[derive(Clone)]
pub struct AlertConfig {
    pub symbol: String,
    pub company_name: String,

    pub alphavantage_api_key: String,
    pub newsapi_key: String,

    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    /// Sender for the chosen channel: the SMS number or the WhatsApp sandbox number.
    pub sender: String,
    pub recipient: String,
    pub channel: Channel,

    pub http_timeout: Option<Duration>,
}

impl std::fmt::Debug for AlertConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertConfig")
            .field("symbol", &self.symbol)
            .field("company_name", &self.company_name)
            .field("sender", &self.sender)
            .field("recipient", &self.recipient)
            .field("channel", &self.channel)
            .field("http_timeout", &self.http_timeout)
            .finish_non_exhaustive()
    }
}

impl AlertConfig {
    /// Load from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::Config`] if a required variable is missing or a value is invalid.
    pub fn from_env() -> Result<Self, AlertError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary lookup. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::Config`] if a required variable is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AlertError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| AlertError::Config(format!("{key} is not set")))
        };

        let channel = match get("ALERT_CHANNEL") {
            Some(raw) => raw.parse()?,
            None => Channel::default(),
        };
        let sender = match channel {
            Channel::Sms => require("TWILIO_SENDER_PHONE_NUMBER")?,
            Channel::WhatsApp => require("TWILIO_WHATSAPP_SANDBOX_NUMBER")?,
        };

        let http_timeout = match get("ALERT_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AlertError::Config(format!("ALERT_HTTP_TIMEOUT_SECS must be whole seconds, got {raw:?}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            symbol: get("STOCK_SYMBOL").unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
            company_name: get("COMPANY_NAME").unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
            alphavantage_api_key: require("ALPHAVANTAGE_API_KEY")?,
            newsapi_key: require("NEWSAPI_KEY")?,
            twilio_account_sid: require("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: require("TWILIO_AUTH_TOKEN")?,
            sender,
            recipient: require("RECIPIENT_PHONE_NUMBER")?,
            channel,
            http_timeout,
        })
    }

    /// The instrument this run watches.
    pub fn watch(&self) -> Watch {
        Watch::new(&self.symbol, &self.company_name)
    }

    /// Build the shared HTTP client with this config's keys and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn client(&self) -> Result<AlertClient, AlertError> {
        let mut b = AlertClient::builder()
            .market_api_key(&self.alphavantage_api_key)
            .news_api_key(&self.newsapi_key);
        if let Some(t) = self.http_timeout {
            b = b.timeout(t);
        }
        b.build()
    }

    /// Build the relay messenger on top of `client`.
    pub fn messenger(&self, client: &AlertClient) -> Messenger {
        Messenger::new(
            client,
            &self.twilio_account_sid,
            &self.twilio_auth_token,
            &self.sender,
            &self.recipient,
            self.channel,
        )
    }
}
