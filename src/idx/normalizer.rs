// src/idx/normalizer.rs

use crate::domain::listing::{
    Agent, GeoLocation, Hoa, Listing, ListingDetails, School, DEFAULT_ADDRESS,
    DEFAULT_PROPERTY_TYPE, DEFAULT_STATUS, DEFAULT_YEAR_BUILT, PLACEHOLDER_IMAGE,
};
use crate::domain::Price;
use crate::idx::models::{RawAgent, RawAssociation, RawGeo, RawProperty, RawSchool};
use base64::Engine;
use serde_json::Value;
use sha2::{Digest, Sha256};

pub fn normalize_all(raws: &[RawProperty]) -> Vec<Listing> {
    raws.iter().map(normalize).collect()
}

/// Maps one feed record onto the canonical [`Listing`], defaulting every
/// missing field. Never fails.
pub fn normalize(raw: &RawProperty) -> Listing {
    let details = raw.property.as_ref();

    let address = text(raw.address.as_ref().and_then(|a| a.full.as_deref()))
        .unwrap_or(DEFAULT_ADDRESS)
        .to_string();
    let price = Price::from_amount(raw.list_price.unwrap_or(0.0));

    let mls_id = raw.mls_id.as_ref().and_then(id_string);
    let listing_id = raw.listing_id.as_ref().and_then(id_string);
    let id = mls_id
        .clone()
        .or_else(|| listing_id.clone())
        .unwrap_or_else(|| derived_id(&address, price));

    let images = match raw.photos.as_ref() {
        Some(photos) if !photos.is_empty() => photos.clone(),
        _ => vec![PLACEHOLDER_IMAGE.to_string()],
    };

    let status = text(raw.listing_status.as_deref())
        .or_else(|| text(raw.mls.as_ref().and_then(|m| m.status.as_deref())))
        .unwrap_or(DEFAULT_STATUS)
        .to_string();

    Listing {
        id,
        address,
        price,
        beds: count(details.and_then(|d| d.bedrooms)),
        baths: count(details.and_then(|d| d.baths_full)),
        sqft: count(details.and_then(|d| d.area)),
        year_built: details
            .and_then(|d| d.year_built)
            .filter(|y| y.is_finite() && *y > 0.0)
            .map(|y| y as i32)
            .unwrap_or(DEFAULT_YEAR_BUILT),
        lot_size: details
            .and_then(|d| d.lot_size.as_ref())
            .and_then(lot_size)
            .unwrap_or(0.0),
        property_type: text(details.and_then(|d| d.property_type.as_deref()))
            .unwrap_or(DEFAULT_PROPERTY_TYPE)
            .to_string(),
        garage_spaces: details
            .and_then(|d| d.garage_spaces)
            .filter(|g| g.is_finite() && *g > 0.0)
            .unwrap_or(0.0),
        images,
        status,
        details: ListingDetails {
            mls_id,
            listing_id,
            description: owned(raw.remarks.as_deref()),
            days_on_market: raw
                .mls
                .as_ref()
                .and_then(|m| m.days_on_market)
                .map(|d| count(Some(d))),
            agent: raw.agent.as_ref().map(agent),
            location: location(raw),
            school: raw.school.as_ref().map(school),
            hoa: raw.association.as_ref().map(hoa),
        },
    }
}

/// Stable id for records without MLS or listing ids, so the same record
/// gets the same id on every fetch.
pub fn derived_id(address: &str, price: Price) -> String {
    let mut hasher = Sha256::new();
    hasher.update(address.as_bytes());
    hasher.update(b"|");
    hasher.update(price.cents().to_be_bytes());
    let digest = hasher.finalize();

    let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..9]);
    format!("gen-{encoded}")
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn owned(value: Option<&str>) -> Option<String> {
    text(value).map(str::to_string)
}

/// Negative, fractional and non-finite counts collapse to a whole, >= 0 value.
fn count(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

fn lot_size(value: &Value) -> Option<f64> {
    let size = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (size.is_finite() && size > 0.0).then_some(size)
}

fn agent(raw: &RawAgent) -> Agent {
    let name = [raw.first_name.as_deref(), raw.last_name.as_deref()]
        .into_iter()
        .filter_map(text)
        .collect::<Vec<_>>()
        .join(" ");
    let contact = raw.contact.as_ref();

    Agent {
        name: (!name.is_empty()).then_some(name),
        phone: owned(contact.and_then(|c| c.cell.as_deref().or(c.office.as_deref()))),
        email: owned(contact.and_then(|c| c.email.as_deref())),
    }
}

fn location(raw: &RawProperty) -> Option<GeoLocation> {
    let address = raw.address.as_ref();
    let geo: Option<&RawGeo> = raw.geo.as_ref();
    if address.is_none() && geo.is_none() {
        return None;
    }

    Some(GeoLocation {
        city: owned(address.and_then(|a| a.city.as_deref())),
        state: owned(address.and_then(|a| a.state.as_deref())),
        zip: owned(address.and_then(|a| a.postal_code.as_deref())),
        county: owned(geo.and_then(|g| g.county.as_deref())),
        latitude: geo.and_then(|g| g.lat),
        longitude: geo.and_then(|g| g.lng),
        market_area: owned(geo.and_then(|g| g.market_area.as_deref())),
    })
}

fn school(raw: &RawSchool) -> School {
    School {
        elementary: owned(raw.elementary_school.as_deref()),
        middle: owned(raw.middle_school.as_deref()),
        high: owned(raw.high_school.as_deref()),
        district: owned(raw.district.as_deref()),
    }
}

fn hoa(raw: &RawAssociation) -> Hoa {
    Hoa {
        fee: raw.fee,
        frequency: owned(raw.frequency.as_deref()),
        name: owned(raw.name.as_deref()),
        amenities: owned(raw.amenities.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Listing {
        let raw: RawProperty = serde_json::from_str(json).expect("fixture should deserialize");
        normalize(&raw)
    }

    #[test]
    fn empty_record_gets_every_default() {
        let listing = parse("{}");

        assert!(listing.id.starts_with("gen-"));
        assert_eq!(listing.address, DEFAULT_ADDRESS);
        assert_eq!(listing.price, Price::default());
        assert_eq!(listing.price.to_string(), "$0");
        assert_eq!((listing.beds, listing.baths, listing.sqft), (0, 0, 0));
        assert_eq!(listing.year_built, 1900);
        assert_eq!(listing.lot_size, 0.0);
        assert_eq!(listing.property_type, "Single Family");
        assert_eq!(listing.garage_spaces, 0.0);
        assert_eq!(listing.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(listing.status, "For Sale");
        assert_eq!(listing.details, ListingDetails::default());
    }

    #[test]
    fn nulls_are_treated_as_missing() {
        let listing = parse(
            r#"{"mlsId":null,"address":null,"listPrice":null,"photos":null,
                "property":{"bedrooms":null,"type":null,"yearBuilt":0}}"#,
        );
        assert_eq!(listing.address, DEFAULT_ADDRESS);
        assert_eq!(listing.year_built, 1900);
        assert_eq!(listing.property_type, "Single Family");
    }

    #[test]
    fn maps_a_full_record() {
        let listing = parse(
            r#"{
                "mlsId": 1005192,
                "listingId": "49699474",
                "address": { "full": "74434 East Sweet Bottom Br #18393", "city": "Fargo", "state": "ND", "postalCode": "58102" },
                "listPrice": 20714261,
                "photos": ["https://example.com/1.jpg", "https://example.com/2.jpg"],
                "remarks": "Bright corner lot.",
                "property": { "bedrooms": 3, "bathsFull": 2, "area": 1043, "yearBuilt": 1996,
                              "lotSize": "0.25", "garageSpaces": 1.76, "type": "RES" },
                "mls": { "status": "Active", "daysOnMarket": 12 },
                "agent": { "firstName": "Ann", "lastName": "Lee", "contact": { "email": "ann@example.com", "office": "701-555-0101" } },
                "association": { "fee": 250, "frequency": "Monthly" },
                "geo": { "lat": 46.87, "lng": -96.78, "county": "Cass" }
            }"#,
        );

        assert_eq!(listing.id, "1005192");
        assert_eq!(listing.price.to_string(), "$20,714,261");
        assert_eq!(listing.beds, 3);
        assert_eq!(listing.baths, 2);
        assert_eq!(listing.sqft, 1043);
        assert_eq!(listing.year_built, 1996);
        assert_eq!(listing.lot_size, 0.25);
        assert_eq!(listing.garage_spaces, 1.76);
        assert_eq!(listing.property_type, "RES");
        assert_eq!(listing.status, "Active");
        assert_eq!(listing.images.len(), 2);

        let details = &listing.details;
        assert_eq!(details.listing_id.as_deref(), Some("49699474"));
        assert_eq!(details.description.as_deref(), Some("Bright corner lot."));
        assert_eq!(details.days_on_market, Some(12));

        let agent = details.agent.as_ref().unwrap();
        assert_eq!(agent.name.as_deref(), Some("Ann Lee"));
        assert_eq!(agent.phone.as_deref(), Some("701-555-0101"));

        let location = details.location.as_ref().unwrap();
        assert_eq!(location.city.as_deref(), Some("Fargo"));
        assert_eq!(location.county.as_deref(), Some("Cass"));
        assert_eq!(details.hoa.as_ref().and_then(|h| h.fee), Some(250.0));
        assert!(details.school.is_none());
    }

    #[test]
    fn falls_back_to_listing_id_then_derived_id() {
        assert_eq!(parse(r#"{"listingId":"L-7"}"#).id, "L-7");
        assert_eq!(parse(r#"{"listingId":42}"#).id, "42");
        assert_eq!(parse(r#"{"mlsId":"","listingId":"L-7"}"#).id, "L-7");
    }

    #[test]
    fn derived_ids_are_stable() {
        let json = r#"{"address":{"full":"1 Main St"},"listPrice":250000}"#;
        let first = parse(json).id;
        assert_eq!(first, parse(json).id);
        assert_eq!(first.len(), "gen-".len() + 12);

        let other = parse(r#"{"address":{"full":"1 Main St"},"listPrice":250001}"#).id;
        assert_ne!(first, other);
    }

    #[test]
    fn status_prefers_listing_status_over_mls() {
        let listing = parse(r#"{"listingStatus":"Pending","mls":{"status":"Active"}}"#);
        assert_eq!(listing.status, "Pending");
    }

    #[test]
    fn empty_photo_list_uses_placeholder_and_negatives_clamp() {
        let listing = parse(r#"{"photos":[],"property":{"bedrooms":-2,"bathsFull":2.5}}"#);
        assert_eq!(listing.cover_image(), PLACEHOLDER_IMAGE);
        assert_eq!(listing.beds, 0);
        assert_eq!(listing.baths, 2);
    }
}
