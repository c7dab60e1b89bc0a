mod api;
mod model;
mod wire;

pub use model::{Article, NO_DESCRIPTION, NO_TITLE};

use crate::core::{AlertClient, AlertError};

/// How many articles follow an alert.
pub const MAX_ARTICLES: usize = 3;

/// Fetches up to [`MAX_ARTICLES`] English articles matching `query`.
///
/// # Errors
///
/// See [`NewsBuilder::fetch`].
pub async fn latest_news(client: &AlertClient, query: &str) -> Result<Vec<Article>, AlertError> {
    NewsBuilder::new(client, query).fetch().await
}

/// A builder for searching news articles about a company.
pub struct NewsBuilder {
    client: AlertClient,
    query: String,
    language: String,
    limit: usize,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a free-text query (usually the company name).
    pub fn new(client: &AlertClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            language: "en".to_string(),
            limit: MAX_ARTICLES,
        }
    }

    /// Sets the article language filter. Default: `en`.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the maximum number of articles to keep. Default: [`MAX_ARTICLES`].
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the search.
    ///
    /// Articles keep the provider's order and are never padded: an empty result is
    /// an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::Status`] on a non-2xx response, [`AlertError::Http`] on a
    /// transport failure, and [`AlertError::Json`] if the body cannot be decoded.
    #[tracing::instrument(skip(self), err, fields(query = %self.query))]
    pub async fn fetch(self) -> Result<Vec<Article>, AlertError> {
        api::fetch_news(&self.client, &self.query, &self.language, self.limit).await
    }
}
