// src/domain/criteria.rs

use crate::domain::price::parse_amount;
use crate::errors::ServerError;
use chrono::Datelike;
use std::collections::HashMap;
use std::str::FromStr;

/// `max_price` at or above this means "no upper bound".
pub const PRICE_CEILING: u64 = 20_000_000;
/// `min_year` at or below this means "no lower bound".
pub const YEAR_FLOOR: i32 = 1900;
pub const DEFAULT_MAX_BEDS: u32 = 10;
/// Category value meaning "no constraint".
pub const ALL: &str = "All";

/// User-supplied filter bounds. Ranges are inclusive and never corrected:
/// an inverted min/max simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub min_beds: u32,
    pub max_beds: u32,
    pub min_baths: u32,
    pub min_price: u64,
    pub max_price: u64,
    /// `None` is "All".
    pub status: Option<String>,
    /// `None` is "All".
    pub property_type: Option<String>,
    pub min_year: i32,
    pub max_year: i32,
}

impl FilterCriteria {
    pub fn unrestricted(current_year: i32) -> Self {
        Self {
            min_beds: 0,
            max_beds: DEFAULT_MAX_BEDS,
            min_baths: 0,
            min_price: 0,
            max_price: PRICE_CEILING,
            status: None,
            property_type: None,
            min_year: YEAR_FLOOR,
            max_year: current_year,
        }
    }

    pub fn is_unrestricted(&self, current_year: i32) -> bool {
        *self == Self::unrestricted(current_year)
    }

    /// Reads `minBeds`, `maxBeds`, `minBaths`, `minPrice`, `maxPrice`,
    /// `status`, `propertyType`, `minYear` and `maxYear`.
    ///
    /// Missing or blank values keep their default.
    pub fn from_query(
        params: &HashMap<String, String>,
        current_year: i32,
    ) -> Result<Self, ServerError> {
        let defaults = Self::unrestricted(current_year);

        Ok(Self {
            min_beds: number(params, "minBeds", defaults.min_beds)?,
            max_beds: number(params, "maxBeds", defaults.max_beds)?,
            min_baths: number(params, "minBaths", defaults.min_baths)?,
            min_price: amount(params, "minPrice", defaults.min_price)?,
            max_price: amount(params, "maxPrice", defaults.max_price)?,
            status: params.get("status").map(String::as_str).and_then(selector),
            property_type: params
                .get("propertyType")
                .map(String::as_str)
                .and_then(selector),
            min_year: number(params, "minYear", defaults.min_year)?,
            max_year: number(params, "maxYear", defaults.max_year)?,
        })
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or(ALL)
    }

    pub fn property_type_label(&self) -> &str {
        self.property_type.as_deref().unwrap_or(ALL)
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Blank and "All" (any case) clear the constraint.
fn selector(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(value.to_string())
    }
}

fn number<T: FromStr>(
    params: &HashMap<String, String>,
    key: &str,
    default: T,
) -> Result<T, ServerError> {
    match params.get(key).map(|v| v.trim()) {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("invalid {key}: {raw}"))),
    }
}

fn amount(params: &HashMap<String, String>, key: &str, default: u64) -> Result<u64, ServerError> {
    match params.get(key).map(|v| v.trim()) {
        None | Some("") => Ok(default),
        Some(raw) => parse_amount(raw)
            .ok_or_else(|| ServerError::BadRequest(format!("invalid {key}: {raw}"))),
    }
}
