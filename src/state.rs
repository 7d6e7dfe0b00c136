// src/state.rs

use crate::config::AppConfig;
use crate::domain::CategoryTable;
use crate::errors::StartupError;
use crate::idx::{HttpTransport, IdxClient};
use crate::mailer::{LogMailer, Mailer, ResendMailer};
use tracing::warn;

/// Shared, read-only across all request workers.
pub struct AppState {
    pub listings: IdxClient,
    pub mailer: Box<dyn Mailer>,
    pub categories: CategoryTable,
}

impl AppState {
    pub fn from_config(cfg: &AppConfig) -> Result<Self, StartupError> {
        let transport = HttpTransport::new(&cfg.idx)?;

        let mailer: Box<dyn Mailer> = match &cfg.mail {
            Some(mail) => Box::new(ResendMailer::new(mail)?),
            None => {
                warn!("RESEND_API_KEY not set, contact inquiries will only be logged");
                Box::new(LogMailer)
            }
        };

        Ok(Self {
            listings: IdxClient::new(Box::new(transport), cfg.idx.limit),
            mailer,
            categories: cfg.categories.clone(),
        })
    }
}
