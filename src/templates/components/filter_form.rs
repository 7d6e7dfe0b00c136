use crate::domain::criteria::{FilterCriteria, PRICE_CEILING, YEAR_FLOOR};
use maud::{html, Markup};

pub const PROPERTY_TYPES: &[&str] = &[
    "Single Family",
    "Condo",
    "Condominium",
    "Townhouse",
    "Rental",
    "Land",
];
pub const STATUSES: &[&str] = &["For Sale", "For Rent", "Pending", "Sold"];

/// Listings search form. Submits as a plain GET; with htmx it swaps only
/// the `#results` region.
pub fn filter_form(criteria: &FilterCriteria, current_year: i32) -> Markup {
    let min_price = (criteria.min_price > 0).then_some(criteria.min_price);
    let max_price = (criteria.max_price < PRICE_CEILING).then_some(criteria.max_price);
    let min_year = (criteria.min_year > YEAR_FLOOR).then_some(criteria.min_year);
    let max_year = (criteria.max_year < current_year).then_some(criteria.max_year);

    html! {
        form class="filters" method="get" action="/listings"
            hx-get="/listings" hx-target="#results" hx-swap="outerHTML" hx-push-url="true"
        {
            label {
                "Min price"
                input type="text" name="minPrice" placeholder="No min" inputmode="numeric"
                    value=[min_price];
            }
            label {
                "Max price"
                input type="text" name="maxPrice" placeholder="No max" inputmode="numeric"
                    value=[max_price];
            }
            label {
                "Beds"
                (count_select("minBeds", criteria.min_beds))
            }
            label {
                "Baths"
                (count_select("minBaths", criteria.min_baths))
            }
            label {
                "Property type"
                (category_select("propertyType", "All Types", PROPERTY_TYPES, criteria.property_type.as_deref()))
            }
            label {
                "Status"
                (category_select("status", "All Status", STATUSES, criteria.status.as_deref()))
            }
            label {
                "Built after"
                input type="number" name="minYear" placeholder=(YEAR_FLOOR) value=[min_year];
            }
            label {
                "Built before"
                input type="number" name="maxYear" placeholder=(current_year) value=[max_year];
            }
            button type="submit" class="btn" { "Apply filters" }
        }
    }
}

fn count_select(name: &str, selected: u32) -> Markup {
    html! {
        select name=(name) {
            option value="0" selected[selected == 0] { "Any" }
            @for n in 1..=6u32 {
                option value=(n) selected[selected == n] { (n) "+" }
            }
        }
    }
}

fn category_select(name: &str, all_label: &str, options: &[&str], selected: Option<&str>) -> Markup {
    html! {
        select name=(name) {
            option value="All" selected[selected.is_none()] { (all_label) }
            @for choice in options {
                option value=(choice) selected[selected == Some(*choice)] { (choice) }
            }
        }
    }
}
