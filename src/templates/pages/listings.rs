// templates/pages/listings.rs

use crate::domain::FilterCriteria;
use crate::filter::FilterOutcome;
use crate::templates::{
    components::{filter_form, listing_card, notice, Tone},
    site_layout,
};
use maud::{html, Markup};

/// Everything the browse page renders.
pub struct ListingsVm<'a> {
    pub outcome: &'a FilterOutcome,
    /// Size of the unfiltered baseline.
    pub total: usize,
    pub criteria: &'a FilterCriteria,
    pub current_year: i32,
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    site_layout(
        "Homes for Sale",
        html! {
            h1 { "Homes for Sale in Fargo-Moorhead" }
            (filter_form(vm.criteria, vm.current_year))
            (listings_results(vm))
        },
    )
}

/// The swappable results region: summary, notice and grid.
pub fn listings_results(vm: &ListingsVm) -> Markup {
    let shown = vm.outcome.listings.len();

    html! {
        section id="results" {
            div class="results-summary" {
                p { "Showing " strong { (shown) } " of " (vm.total) " properties" }
                @if let Some(active) = &vm.outcome.active {
                    p class="muted" {
                        "Type: " (active.property_type_label()) " • Status: " (active.status_label())
                    }
                    a href="/listings" hx-get="/listings" hx-target="#results" hx-swap="outerHTML" hx-push-url="true" {
                        "Clear all filters"
                    }
                }
            }

            @if let Some(message) = &vm.outcome.notice {
                (notice(Tone::Warning, "Search Notice", message))
            }

            @if vm.outcome.listings.is_empty() {
                div class="empty" {
                    h3 { "No properties found" }
                    p class="muted" { "Try adjusting your search criteria to find more properties." }
                    a href="/listings" class="btn" { "Clear filters" }
                }
            } @else {
                div class="grid" {
                    @for listing in &vm.outcome.listings {
                        (listing_card(listing))
                    }
                }
            }
        }
    }
}
