// src/filter/orchestrator.rs

use crate::domain::criteria::PRICE_CEILING;
use crate::domain::{FilterCriteria, Listing};
use crate::filter::predicate::Predicate;
use crate::idx::{IdxClient, IdxError, ListingQuery};
use tracing::{info, warn};

/// Limit used when re-querying the feed with filter bounds.
pub const FILTER_QUERY_LIMIT: u32 = 100;
pub const LOCAL_FILTER_NOTICE: &str = "Failed to apply filters. Using local filtering instead.";

/// Where filtered searches go. Implemented by [`IdxClient`] through its
/// fallible path so a failed search is visible here.
pub trait ListingSource {
    fn search(&self, query: &ListingQuery) -> Result<Vec<Listing>, IdxError>;
}

impl ListingSource for IdxClient {
    fn search(&self, query: &ListingQuery) -> Result<Vec<Listing>, IdxError> {
        self.try_fetch_listings(query)
    }
}

/// Result of one filter action. The caller owns it and replaces its
/// current listings wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub listings: Vec<Listing>,
    /// Criteria in effect, `None` when nothing is filtered.
    pub active: Option<FilterCriteria>,
    /// Non-fatal advisory for the user.
    pub notice: Option<String>,
}

/// The remote half of a filter: price bounds, bed and bath minimums.
/// Property type and status are left to the local predicate since the
/// feed's category vocabulary is unreliable.
pub fn remote_query(criteria: &FilterCriteria) -> ListingQuery {
    ListingQuery {
        min_price: Some(criteria.min_price).filter(|p| *p > 0),
        max_price: Some(criteria.max_price).filter(|p| *p < PRICE_CEILING),
        min_beds: Some(criteria.min_beds).filter(|b| *b > 0),
        min_baths: Some(criteria.min_baths).filter(|b| *b > 0),
        property_type: None,
        status: None,
        limit: FILTER_QUERY_LIMIT,
    }
}

/// Filters `baseline` by `criteria`.
///
/// Unrestricted criteria return the baseline untouched without touching the
/// source. Otherwise the source is searched with [`remote_query`] and every
/// result re-checked locally; if the search fails, the baseline is filtered
/// locally instead and a notice is attached. Source order is kept.
pub fn apply_filters(
    baseline: &[Listing],
    criteria: &FilterCriteria,
    source: &dyn ListingSource,
    predicate: &Predicate<'_>,
) -> FilterOutcome {
    if criteria.is_unrestricted(predicate.current_year()) {
        info!("No filters applied, using all listings");
        return FilterOutcome {
            listings: baseline.to_vec(),
            active: None,
            notice: None,
        };
    }

    let query = remote_query(criteria);
    info!(?query, "Applying filters");

    match source.search(&query) {
        Ok(found) => {
            let fetched = found.len();
            let listings: Vec<Listing> = found
                .into_iter()
                .filter(|l| predicate.matches(l, criteria))
                .collect();
            info!(fetched, kept = listings.len(), "Filtered remote listings");

            FilterOutcome {
                listings,
                active: Some(criteria.clone()),
                notice: None,
            }
        }
        Err(e) => {
            warn!("Filter search failed: {e}");
            let listings: Vec<Listing> = baseline
                .iter()
                .filter(|l| predicate.matches(l, criteria))
                .cloned()
                .collect();
            info!(kept = listings.len(), "Fallback filtering");

            FilterOutcome {
                listings,
                active: Some(criteria.clone()),
                notice: Some(LOCAL_FILTER_NOTICE.to_string()),
            }
        }
    }
}
