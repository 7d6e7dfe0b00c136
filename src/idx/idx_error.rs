use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdxError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Listings API error: HTTP {0}")]
    Status(u16),
    #[error("JSON parse error: {0}")]
    Json(String),
}
