use thiserror::Error;

/// The only error a query can end in. The controller turns every variant
/// into the same empty result; the variants exist for `Display` and
/// `source()` only.
#[derive(Debug, Error)]
pub enum QueryFailed {
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("base url '{0}' cannot take a path")]
    BaseUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("route service answered {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}
