// src/filter/predicate.rs

use crate::domain::criteria::{current_year, FilterCriteria, PRICE_CEILING, YEAR_FLOOR};
use crate::domain::{CategoryTable, Listing};
use tracing::debug;

/// The first check a listing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    PriceBelowMin,
    PriceAboveMax,
    TooFewBeds,
    TooFewBaths,
    PropertyType,
    Status,
    BuiltTooEarly,
    BuiltTooLate,
}

/// Decides whether a listing satisfies a set of criteria.
///
/// Pure: the only inputs are the listing, the criteria, the synonym table
/// and the year treated as "current" for the `max_year` sentinel.
#[derive(Debug, Clone, Copy)]
pub struct Predicate<'a> {
    categories: &'a CategoryTable,
    current_year: i32,
}

impl<'a> Predicate<'a> {
    pub fn new(categories: &'a CategoryTable, current_year: i32) -> Self {
        Self {
            categories,
            current_year,
        }
    }

    pub fn for_today(categories: &'a CategoryTable) -> Self {
        Self::new(categories, current_year())
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn matches(&self, listing: &Listing, criteria: &FilterCriteria) -> bool {
        match self.check(listing, criteria) {
            Ok(()) => true,
            Err(reason) => {
                debug!(listing = %listing.address, ?reason, "Filtered out");
                false
            }
        }
    }

    /// Runs the checks in order: price, beds, baths, property type, status,
    /// year built.
    pub fn check(&self, listing: &Listing, criteria: &FilterCriteria) -> Result<(), Rejection> {
        let price = listing.price.dollars();
        if criteria.min_price > 0 && price < criteria.min_price {
            return Err(Rejection::PriceBelowMin);
        }
        if criteria.max_price < PRICE_CEILING && price > criteria.max_price {
            return Err(Rejection::PriceAboveMax);
        }

        if criteria.min_beds > 0 && listing.beds < criteria.min_beds {
            return Err(Rejection::TooFewBeds);
        }
        if criteria.min_baths > 0 && listing.baths < criteria.min_baths {
            return Err(Rejection::TooFewBaths);
        }

        if let Some(wanted) = criteria.property_type.as_deref() {
            if !self.property_type_matches(&listing.property_type, wanted) {
                return Err(Rejection::PropertyType);
            }
        }
        if let Some(wanted) = criteria.status.as_deref() {
            if !self.status_matches(&listing.status, wanted) {
                return Err(Rejection::Status);
            }
        }

        if criteria.min_year > YEAR_FLOOR && listing.year_built < criteria.min_year {
            return Err(Rejection::BuiltTooEarly);
        }
        if criteria.max_year < self.current_year && listing.year_built > criteria.max_year {
            return Err(Rejection::BuiltTooLate);
        }

        Ok(())
    }

    /// Exact, containment in either direction, or a table synonym.
    fn property_type_matches(&self, listing: &str, wanted: &str) -> bool {
        let listing = listing.trim().to_lowercase();
        let wanted = wanted.trim().to_lowercase();

        listing == wanted
            || listing.contains(&wanted)
            || wanted.contains(&listing)
            || self.categories.property_type_alias(&wanted, &listing)
    }

    /// Exact, listing contains the wanted status, or a table synonym.
    fn status_matches(&self, listing: &str, wanted: &str) -> bool {
        let listing = listing.trim().to_lowercase();
        let wanted = wanted.trim().to_lowercase();

        listing == wanted
            || listing.contains(&wanted)
            || self.categories.status_alias(&wanted, &listing)
    }
}
