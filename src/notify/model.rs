use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::AlertError;

/// Prefix the relay uses for chat-app addresses.
pub const WHATSAPP_PREFIX: &str = "whatsapp:";

/// Delivery channel on the messaging relay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Channel {
    /// Direct text message; addresses are plain phone numbers.
    Sms,
    /// Chat-app message; addresses are `whatsapp:`-qualified.
    #[default]
    WhatsApp,
}

impl Channel {
    /// Qualifies a phone number for this channel. Already-qualified numbers are kept.
    pub fn address(self, number: &str) -> String {
        match self {
            Channel::Sms => number.to_string(),
            Channel::WhatsApp if number.starts_with(WHATSAPP_PREFIX) => number.to_string(),
            Channel::WhatsApp => format!("{WHATSAPP_PREFIX}{number}"),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Sms => "sms",
            Channel::WhatsApp => "whatsapp",
        })
    }
}

impl FromStr for Channel {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sms" => Ok(Channel::Sms),
            "whatsapp" => Ok(Channel::WhatsApp),
            other => Err(AlertError::Config(format!(
                "unknown channel {other:?} (expected \"sms\" or \"whatsapp\")"
            ))),
        }
    }
}

/// What the relay reported after accepting a message.
///
/// Acceptance is not delivery: `status` is usually `queued` and is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    /// The relay's message identifier.
    pub sid: String,
    /// The relay's status for the message, when present.
    pub status: Option<String>,
    /// Relay error code attached to an accepted message, e.g. after a failed delivery.
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}
