// src/idx/client.rs
use crate::config::IdxConfig;
use crate::domain::Listing;
use crate::idx::fallback::fallback_listings;
use crate::idx::models::{parse_record, parse_records};
use crate::idx::normalizer::{normalize, normalize_all};
use crate::idx::query::ListingQuery;
use crate::idx::IdxError;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const USER_AGENT: &str = concat!("realty-site/", env!("CARGO_PKG_VERSION"));

/// Status and body of one API call, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network boundary of the listings client.
pub trait Transport: Send + Sync {
    /// GET `path` (relative to the API root) with the given query pairs.
    fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<RawResponse, IdxError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<RawResponse, IdxError> {
        (**self).get(path, params)
    }
}

/// Blocking HTTP transport with Basic auth against the SimplyRETS API.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpTransport {
    pub fn new(cfg: &IdxConfig) -> Result<Self, IdxError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| IdxError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            username: cfg.username.clone(),
            password: cfg.password.clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<RawResponse, IdxError> {
        let url = format!("{}/{}", self.base_url, path);

        // no-cache: listings must be current on every request
        let resp = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .query(params)
            .send()
            .map_err(|e| IdxError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| IdxError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

/// Reads listings from the MLS feed, normalizing every record.
///
/// The `try_*` methods report failures; the plain ones never fail and
/// degrade to the fallback dataset (bulk) or `None` (single).
pub struct IdxClient {
    transport: Box<dyn Transport>,
    default_limit: u32,
}

impl IdxClient {
    pub fn new(transport: Box<dyn Transport>, default_limit: u32) -> Self {
        Self {
            transport,
            default_limit,
        }
    }

    pub fn default_query(&self) -> ListingQuery {
        ListingQuery::with_limit(self.default_limit)
    }

    pub fn try_fetch_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>, IdxError> {
        let resp = self.transport.get("properties", &query.to_params())?;
        if !resp.is_success() {
            return Err(IdxError::Status(resp.status));
        }

        let raws = parse_records(&resp.body).map_err(|e| IdxError::Json(e.to_string()))?;

        Ok(normalize_all(&raws))
    }

    pub fn fetch_listings(&self, query: &ListingQuery) -> Vec<Listing> {
        match self.try_fetch_listings(query) {
            Ok(listings) => {
                info!("Fetched {} listings from IDX", listings.len());
                listings
            }
            Err(e) => {
                warn!("Error fetching IDX listings: {e}");
                info!("Using fallback listing data");
                fallback_listings()
            }
        }
    }

    /// `Ok(None)` when the API answers 404 for `id`.
    pub fn try_fetch_listing(&self, id: &str) -> Result<Option<Listing>, IdxError> {
        let encoded: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
        let resp = self.transport.get(&format!("properties/{encoded}"), &[])?;

        if resp.status == 404 {
            return Ok(None);
        }
        if !resp.is_success() {
            return Err(IdxError::Status(resp.status));
        }

        let raw = parse_record(&resp.body).map_err(|e| IdxError::Json(e.to_string()))?;

        Ok(Some(normalize(&raw)))
    }

    pub fn fetch_listing(&self, id: &str) -> Option<Listing> {
        match self.try_fetch_listing(id) {
            Ok(Some(listing)) => Some(listing),
            Ok(None) => {
                info!("Listing {id} not found");
                None
            }
            Err(e) => {
                warn!("Error fetching listing {id}: {e}");
                None
            }
        }
    }
}
