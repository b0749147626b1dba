#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("speech recognition is not available: {0}")]
    Unavailable(String),

    #[error("failed to read recognition events: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed recognition event: {0}")]
    Event(#[from] serde_json::Error),
}
