use reqwest::header::CONTENT_TYPE;
use url::form_urlencoded;

use crate::{
    core::{AlertClient, AlertError, net},
    notify::{
        model::Delivery,
        wire::{MessageResource, RelayError},
    },
};

pub(super) async fn send_message(
    client: &AlertClient,
    account_sid: &str,
    auth_token: &str,
    from: &str,
    to: &str,
    body: &str,
) -> Result<Delivery, AlertError> {
    let url = client
        .base_relay()
        .join(&format!("Accounts/{account_sid}/Messages.json"))?;

    let form = form_urlencoded::Serializer::new(String::new())
        .append_pair("From", from)
        .append_pair("To", to)
        .append_pair("Body", body)
        .finish();

    let resp = client
        .http()
        .post(url)
        .basic_auth(account_sid, Some(auth_token))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(form)
        .send()
        .await?;

    let status = resp.status();
    let text = net::get_text(resp, "relay_messages").await?;

    if !status.is_success() {
        // The relay explains refusals in a small JSON object; fall back to nothing.
        let err = serde_json::from_str::<RelayError>(&text).ok();
        let message = err.and_then(|e| match (e.code, e.message) {
            (Some(code), Some(msg)) => Some(format!("{msg} (code {code})")),
            (None, Some(msg)) => Some(msg),
            (Some(code), None) => Some(format!("code {code}")),
            (None, None) => None,
        });
        return Err(AlertError::Delivery {
            status: status.as_u16(),
            message,
        });
    }

    let msg: MessageResource = serde_json::from_str(&text)?;
    Ok(Delivery {
        sid: msg.sid,
        status: msg.status,
        error_code: msg.error_code,
        error_message: msg.error_message,
    })
}
