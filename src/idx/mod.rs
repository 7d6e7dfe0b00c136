mod client;
mod fallback;
mod idx_error;
mod models;
mod normalizer;
mod query;

pub use client::{HttpTransport, IdxClient, RawResponse, Transport};
pub use fallback::fallback_listings;
pub use idx_error::IdxError;
pub use query::{ListingQuery, DEFAULT_LIMIT};
