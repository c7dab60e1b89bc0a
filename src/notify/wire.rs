use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct MessageResource {
    pub(crate) sid: String,
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[serde(default)]
    pub(crate) error_code: Option<i64>,
    #[serde(default)]
    pub(crate) error_message: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RelayError {
    #[serde(default)]
    pub(crate) code: Option<i64>,
    #[serde(default)]
    pub(crate) message: Option<String>,
}
