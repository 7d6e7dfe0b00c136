// src/mailer.rs

use crate::config::MailConfig;
use crate::domain::Inquiry;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

/// Delivers contact inquiries to the site owner.
pub trait Mailer: Send + Sync {
    fn send_inquiry(&self, inquiry: &Inquiry) -> Result<(), MailerError>;
}

pub struct ResendMailer {
    api_key: String,
    from: String,
    to: String,
    client: Client,
}

#[derive(Serialize)]
struct ResendPayload<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: String,
    text: String,
}

impl ResendMailer {
    pub fn new(cfg: &MailConfig) -> Result<Self, MailerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        Ok(Self {
            api_key: cfg.api_key.clone(),
            from: cfg.from.clone(),
            to: cfg.to.clone(),
            client,
        })
    }
}

impl Mailer for ResendMailer {
    fn send_inquiry(&self, inquiry: &Inquiry) -> Result<(), MailerError> {
        let payload = ResendPayload {
            from: &self.from,
            to: vec![&self.to],
            subject: inquiry.email_subject(),
            text: inquiry.email_text(),
        };

        let resp = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let error_body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MailerError::ApiError(format!("HTTP {status}: {error_body}")));
        }

        info!(to = %self.to, "Inquiry from {} delivered", inquiry.email);
        Ok(())
    }
}

/// Stand-in when no provider is configured: the inquiry goes to the log.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send_inquiry(&self, inquiry: &Inquiry) -> Result<(), MailerError> {
        warn!(
            subject = %inquiry.email_subject(),
            "No mail provider configured, inquiry logged only:\n{}",
            inquiry.email_text()
        );
        Ok(())
    }
}
