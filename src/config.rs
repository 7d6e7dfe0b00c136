// src/config.rs

use crate::domain::CategoryTable;
use crate::idx::DEFAULT_LIMIT;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_IDX_BASE_URL: &str = "https://api.simplyrets.com";
// Public demo credentials for the SimplyRETS sandbox feed.
const DEFAULT_IDX_USERNAME: &str = "simplyrets";
const DEFAULT_IDX_PASSWORD: &str = "simplyrets";
const DEFAULT_IDX_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("could not read category table {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("category table {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct IdxConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub limit: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub idx: IdxConfig,
    pub categories: CategoryTable,
    /// `None` when no mail provider is configured.
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    /// Load configuration from the process environment, after a `.env`
    /// file if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let categories = match get("CATEGORY_TABLE_PATH") {
            Some(path) => load_categories(&path)?,
            None => CategoryTable::default(),
        };

        Ok(Self {
            bind_addr: parsed(&get, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)))?,
            max_workers: parsed(&get, "MAX_WORKERS", DEFAULT_MAX_WORKERS)?,
            idx: IdxConfig {
                base_url: get("IDX_BASE_URL").unwrap_or_else(|| DEFAULT_IDX_BASE_URL.into()),
                username: get("IDX_USERNAME").unwrap_or_else(|| DEFAULT_IDX_USERNAME.into()),
                password: get("IDX_PASSWORD").unwrap_or_else(|| DEFAULT_IDX_PASSWORD.into()),
                limit: parsed(&get, "IDX_LIMIT", DEFAULT_LIMIT)?,
                timeout_secs: parsed(&get, "IDX_TIMEOUT_SECS", DEFAULT_IDX_TIMEOUT_SECS)?,
            },
            categories,
            mail: mail_config(&get)?,
        })
    }
}

fn parsed<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

/// All three Resend settings, or none of them.
fn mail_config<G>(get: &G) -> Result<Option<MailConfig>, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let api_key = get("RESEND_API_KEY");
    let from = get("RESEND_FROM");
    let to = get("RESEND_TO");

    match (api_key, from, to) {
        (None, None, None) => Ok(None),
        (Some(api_key), Some(from), Some(to)) => Ok(Some(MailConfig { api_key, from, to })),
        (None, _, _) => Err(ConfigError::Missing("RESEND_API_KEY")),
        (_, None, _) => Err(ConfigError::Missing("RESEND_FROM")),
        (_, _, None) => Err(ConfigError::Missing("RESEND_TO")),
    }
}

fn load_categories(path: &str) -> Result<CategoryTable, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    CategoryTable::from_json(&text).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}
