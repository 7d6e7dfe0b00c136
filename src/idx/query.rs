// src/idx/query.rs

pub const DEFAULT_LIMIT: u32 = 50;

/// The parameters the listings API can filter on.
///
/// Numeric bounds are only sent when non-zero; `None` categories mean "All"
/// and are left off the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_beds: Option<u32>,
    pub min_baths: Option<u32>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub limit: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }
}

impl ListingQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            min_price: None,
            max_price: None,
            min_beds: None,
            min_baths: None,
            property_type: None,
            status: None,
            limit,
        }
    }

    /// Query pairs in the API's naming: `minprice`, `maxprice`, `minbeds`,
    /// `minbaths`, `type`, `status`, `limit`.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let mut number = |key: &'static str, value: Option<u64>| {
            if let Some(v) = value.filter(|v| *v > 0) {
                params.push((key, v.to_string()));
            }
        };
        number("minprice", self.min_price);
        number("maxprice", self.max_price);
        number("minbeds", self.min_beds.map(u64::from));
        number("minbaths", self.min_baths.map(u64::from));

        if let Some(t) = category(&self.property_type) {
            params.push(("type", t.to_string()));
        }
        if let Some(s) = category(&self.status) {
            params.push(("status", s.to_string()));
        }
        params.push(("limit", self.limit.to_string()));

        params
    }
}

fn category(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(crate::domain::criteria::ALL))
}
