mod api;
mod model;
mod wire;

pub use model::{Channel, Delivery, WHATSAPP_PREFIX};

use crate::core::{AlertClient, AlertError};

/// Sends text messages through the messaging relay to one fixed recipient.
///
/// A `Messenger` is built once at the start of a run and passed to whatever needs to
/// notify. It holds no connection state of its own; every [`send`](Self::send) is an
/// independent request.
#[derive(Clone)]
pub struct Messenger {
    client: AlertClient,
    account_sid: String,
    auth_token: String,
    from: String,
    to: String,
    channel: Channel,
}

impl std::fmt::Debug for Messenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messenger")
            .field("account_sid", &self.account_sid)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

impl Messenger {
    /// Creates a messenger for the given account, sender, recipient and channel.
    ///
    /// `from` and `to` are bare phone numbers; the channel qualifies them.
    pub fn new(
        client: &AlertClient,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from: &str,
        to: &str,
        channel: Channel,
    ) -> Self {
        Self {
            client: client.clone(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from: channel.address(from),
            to: channel.address(to),
            channel,
        }
    }

    /// The channel messages go out on.
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Submits one message and logs the relay's identifier and status.
    ///
    /// The returned status is informational only; a `failed` or `undelivered`
    /// status in an accepted reply is not turned into an error.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::Delivery`] if the relay refuses the message and
    /// [`AlertError::Http`] on a transport failure.
    #[tracing::instrument(skip(self, body), err, fields(channel = %self.channel))]
    pub async fn send(&self, body: &str) -> Result<Delivery, AlertError> {
        let delivery = api::send_message(
            &self.client,
            &self.account_sid,
            &self.auth_token,
            &self.from,
            &self.to,
            body,
        )
        .await?;

        tracing::info!(
            sid = %delivery.sid,
            status = delivery.status.as_deref().unwrap_or("unknown"),
            error_code = delivery.error_code,
            error_message = delivery.error_message.as_deref(),
            "message submitted"
        );
        Ok(delivery)
    }
}
