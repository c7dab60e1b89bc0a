use serde::Serialize;

/// Placeholder used when the provider omits an article's title.
pub const NO_TITLE: &str = "No title";
/// Placeholder used when the provider omits an article's description.
pub const NO_DESCRIPTION: &str = "No description";

/// A news article related to the watched company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// The headline, or [`NO_TITLE`].
    pub title: String,
    /// The short description, or [`NO_DESCRIPTION`].
    pub description: String,
}

impl Article {
    /// The text sent for this article.
    pub fn message(&self) -> String {
        format!("Headline: {}\nBrief: {}", self.title, self.description)
    }
}
