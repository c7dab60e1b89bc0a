use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    #[serde(default)]
    pub(crate) articles: Option<Vec<RawArticle>>,
}

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
}
