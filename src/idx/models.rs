use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// SimplyRETS property record (only the parts we read)
//  ├── mlsId / listingId
//  ├── address ── full, city, state, postalCode
//  ├── listPrice, listingStatus, photos[], remarks
//  ├── property
//  │    ├── bedrooms, bathsFull, area
//  │    ├── yearBuilt, lotSize, garageSpaces
//  │    └── type
//  ├── mls ── status, daysOnMarket
//  ├── agent ── firstName, lastName, contact { email, office, cell }
//  ├── school ── elementarySchool, middleSchool, highSchool, district
//  ├── association ── fee, frequency, name, amenities
//  └── geo ── lat, lng, county, marketArea
//
// Every field is optional so `{}` deserializes. A field of the wrong type
// reads as missing instead of failing the record. Numbers are read as f64,
// numeric strings included.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProperty {
    /// Numeric in SimplyRETS, but kept loose so string ids also work.
    pub mls_id: Option<Value>,
    pub listing_id: Option<Value>,

    #[serde(deserialize_with = "lenient")]
    pub address: Option<RawAddress>,
    #[serde(deserialize_with = "lenient_number")]
    pub list_price: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub listing_status: Option<String>,
    #[serde(deserialize_with = "lenient_texts")]
    pub photos: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_text")]
    pub remarks: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub property: Option<RawDetails>,
    #[serde(deserialize_with = "lenient")]
    pub mls: Option<RawMls>,
    #[serde(deserialize_with = "lenient")]
    pub agent: Option<RawAgent>,
    #[serde(deserialize_with = "lenient")]
    pub school: Option<RawSchool>,
    #[serde(deserialize_with = "lenient")]
    pub association: Option<RawAssociation>,
    #[serde(deserialize_with = "lenient")]
    pub geo: Option<RawGeo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAddress {
    #[serde(deserialize_with = "lenient_text")]
    pub full: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDetails {
    #[serde(deserialize_with = "lenient_number")]
    pub bedrooms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub baths_full: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub area: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub year_built: Option<f64>,
    /// Number or free text like "0.25" depending on the board.
    pub lot_size: Option<Value>,
    #[serde(deserialize_with = "lenient_number")]
    pub garage_spaces: Option<f64>,
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub property_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMls {
    #[serde(deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub days_on_market: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAgent {
    #[serde(deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub contact: Option<RawContact>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawContact {
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub office: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub cell: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSchool {
    #[serde(deserialize_with = "lenient_text")]
    pub elementary_school: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub middle_school: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub high_school: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub district: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAssociation {
    #[serde(deserialize_with = "lenient_number")]
    pub fee: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub frequency: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub amenities: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGeo {
    #[serde(deserialize_with = "lenient_number")]
    pub lat: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub lng: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub county: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub market_area: Option<String>,
}

impl RawProperty {
    /// Reads one record out of arbitrary JSON. Anything that is not an
    /// object becomes an empty record.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Decodes a feed page. Only the outer array is required; each element is
/// read with [`RawProperty::from_value`].
pub fn parse_records(body: &str) -> Result<Vec<RawProperty>, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_str(body)?;
    Ok(values.into_iter().map(RawProperty::from_value).collect())
}

pub fn parse_record(body: &str) -> Result<RawProperty, serde_json::Error> {
    serde_json::from_str(body).map(RawProperty::from_value)
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Keeps the string entries of an array and drops the rest.
fn lenient_texts<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
