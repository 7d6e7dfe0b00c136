// src/domain/listing.rs

use crate::domain::price::Price;

pub const PLACEHOLDER_IMAGE: &str = "/listings/placeholder.jpg";
pub const DEFAULT_ADDRESS: &str = "Address not available";
pub const DEFAULT_PROPERTY_TYPE: &str = "Single Family";
pub const DEFAULT_STATUS: &str = "For Sale";
pub const DEFAULT_YEAR_BUILT: i32 = 1900;

/// Canonical listing. Built fresh on every fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub address: String,
    pub price: Price,

    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub year_built: i32,
    pub lot_size: f64,
    pub property_type: String,
    pub garage_spaces: f64,

    /// Never empty: falls back to [`PLACEHOLDER_IMAGE`].
    pub images: Vec<String>,
    pub status: String,

    pub details: ListingDetails,
}

/// Extended attributes carried through when the feed has them.
/// Nothing in the filtering path reads these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDetails {
    pub mls_id: Option<String>,
    pub listing_id: Option<String>,
    pub description: Option<String>,
    pub days_on_market: Option<u32>,
    pub agent: Option<Agent>,
    pub location: Option<GeoLocation>,
    pub school: Option<School>,
    pub hoa: Option<Hoa>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Agent {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoLocation {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub county: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub market_area: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct School {
    pub elementary: Option<String>,
    pub middle: Option<String>,
    pub high: Option<String>,
    pub district: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hoa {
    pub fee: Option<f64>,
    pub frequency: Option<String>,
    pub name: Option<String>,
    pub amenities: Option<String>,
}

impl Listing {
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// "3 beds • 2 baths • 1,850 sqft"
    pub fn summary(&self) -> String {
        format!(
            "{} • {} • {} sqft",
            plural(self.beds, "bed"),
            plural(self.baths, "bath"),
            group_digits(self.sqft as u64)
        )
    }
}

pub fn plural(n: u32, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// `1850` -> `1,850`
pub fn group_digits(n: u64) -> String {
    crate::domain::price::format_price(n)
        .trim_start_matches('$')
        .to_string()
}
