use crate::domain::{CategoryTable, Inquiry};
use crate::idx::{IdxClient, IdxError, RawResponse, Transport};
use crate::mailer::{Mailer, MailerError};
use crate::state::AppState;
use astra::Response;
use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Serves canned bodies per API path; anything unrouted is a network error.
/// Records every request.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, RawResponse>,
    pub calls: Mutex<Vec<(String, Vec<(&'static str, String)>)>>,
}

impl FakeTransport {
    /// No routes: every call fails as if the API were unreachable.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            RawResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }
}

impl Transport for FakeTransport {
    fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<RawResponse, IdxError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), params.to_vec()));
        self.routes
            .get(path)
            .cloned()
            .ok_or_else(|| IdxError::Network(format!("no route for {path}")))
    }
}

/// Keeps every inquiry it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<Inquiry>>>,
}

impl Mailer for RecordingMailer {
    fn send_inquiry(&self, inquiry: &Inquiry) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(inquiry.clone());
        Ok(())
    }
}

pub struct FailingMailer;

impl Mailer for FailingMailer {
    fn send_inquiry(&self, _inquiry: &Inquiry) -> Result<(), MailerError> {
        Err(MailerError::ApiError("HTTP 500: provider down".into()))
    }
}

pub fn test_state(transport: Arc<FakeTransport>, mailer: Box<dyn Mailer>) -> AppState {
    AppState {
        listings: IdxClient::new(Box::new(transport), 50),
        mailer,
        categories: CategoryTable::default(),
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
