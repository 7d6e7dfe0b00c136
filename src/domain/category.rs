// src/domain/category.rs

use serde::Deserialize;

/// One canonical category and the feed vocabulary that stands for it.
///
/// The MLS feed is loose about category names ("RES", "con", "Active"),
/// so the filter form's canonical choices are mapped onto feed values here
/// instead of in the predicate code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySynonym {
    /// Category as picked in the filter form, e.g. "Condo".
    pub canonical: String,
    /// Feed values that mean the category verbatim, e.g. "con".
    #[serde(default)]
    pub codes: Vec<String>,
    /// Fragments that mark a feed value as the category, e.g. "condo".
    #[serde(default)]
    pub stems: Vec<String>,
}

impl CategorySynonym {
    pub fn new(canonical: &str, codes: &[&str], stems: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            codes: codes.iter().map(|c| c.to_string()).collect(),
            stems: stems.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// `listing` must already be lowercased.
    fn covers(&self, listing: &str) -> bool {
        self.codes.iter().any(|code| code.eq_ignore_ascii_case(listing))
            || self
                .stems
                .iter()
                .filter(|stem| !stem.is_empty())
                .any(|stem| listing.contains(&stem.to_lowercase()))
    }
}

/// Synonym tables for the two loosely-typed listing fields.
///
/// Loaded from JSON when `CATEGORY_TABLE_PATH` is set:
///
/// ```json
/// { "property_types": [{ "canonical": "Condo", "codes": ["con"], "stems": ["condo"] }],
///   "statuses": [{ "canonical": "For Sale", "codes": ["active"] }] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryTable {
    #[serde(default)]
    pub property_types: Vec<CategorySynonym>,
    #[serde(default)]
    pub statuses: Vec<CategorySynonym>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            property_types: vec![
                CategorySynonym::new("Single Family", &["res"], &["single"]),
                CategorySynonym::new("Condo", &["con"], &["condo"]),
                CategorySynonym::new("Rental", &["rnt"], &["rent"]),
            ],
            statuses: vec![
                CategorySynonym::new("For Sale", &["active"], &[]),
                CategorySynonym::new("Active", &["for sale"], &[]),
            ],
        }
    }
}

impl CategoryTable {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// True when the table maps the feed's `listing` value onto the
    /// filter's `filter` property type.
    pub fn property_type_alias(&self, filter: &str, listing: &str) -> bool {
        lookup(&self.property_types, filter, listing)
    }

    pub fn status_alias(&self, filter: &str, listing: &str) -> bool {
        lookup(&self.statuses, filter, listing)
    }
}

fn lookup(entries: &[CategorySynonym], filter: &str, listing: &str) -> bool {
    let listing = listing.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.canonical.eq_ignore_ascii_case(filter.trim()))
        .any(|entry| entry.covers(&listing))
}
