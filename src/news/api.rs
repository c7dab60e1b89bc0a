use crate::{
    core::{AlertClient, AlertError, net},
    news::{
        model::{Article, NO_DESCRIPTION, NO_TITLE},
        wire,
    },
};

pub(super) async fn fetch_news(
    client: &AlertClient,
    query: &str,
    language: &str,
    limit: usize,
) -> Result<Vec<Article>, AlertError> {
    let mut url = client.base_news().clone();
    url.query_pairs_mut()
        .append_pair("language", language)
        .append_pair("q", query);

    let req = client
        .http()
        .get(url)
        .header("X-Api-Key", client.news_api_key()?);
    let resp = net::ensure_success(req.send().await?)?;

    let body = net::get_text(resp, "news_everything").await?;
    let envelope: wire::NewsEnvelope = serde_json::from_str(&body)?;

    let mut raw = envelope.articles.unwrap_or_default();
    raw.truncate(limit);

    let articles = raw
        .into_iter()
        .map(|a| {
            if a.title.is_none() || a.description.is_none() {
                tracing::debug!(
                    has_title = a.title.is_some(),
                    has_description = a.description.is_some(),
                    "article missing fields, using placeholders"
                );
            }
            Article {
                title: a.title.unwrap_or_else(|| NO_TITLE.to_string()),
                description: a.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            }
        })
        .collect();

    Ok(articles)
}
