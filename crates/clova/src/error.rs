#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transcription failed ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid api base: {0}")]
    InvalidApiBase(#[from] url::ParseError),
}
