use url::Url;

use crate::core::AlertError;

/// Render a URL for errors and logs. The query is dropped because it may carry an API key.
pub(crate) fn redacted(url: &Url) -> String {
    let mut u = url.clone();
    u.set_query(None);
    u.to_string()
}

/// Map a non-2xx response from a data provider to [`AlertError::Status`].
pub(crate) fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, AlertError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    Err(AlertError::Status {
        status: resp.status().as_u16(),
        url: redacted(resp.url()),
    })
}

/// Read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response, endpoint: &str) -> Result<String, AlertError> {
    let text = resp.text().await?;
    tracing::trace!(endpoint, bytes = text.len(), "response body received");
    Ok(text)
}
