// errors.rs
use crate::mailer::MailerError;
use astra::Response;
use thiserror::Error;

/// Errors a route handler can end in. Upstream listing failures never get
/// here; the listings client degrades instead.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Mail Error: {0}")]
    Mail(#[from] MailerError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Anything that stops the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("listings client: {0}")]
    Idx(#[from] crate::idx::IdxError),
    #[error("mailer: {0}")]
    Mail(#[from] MailerError),
}
