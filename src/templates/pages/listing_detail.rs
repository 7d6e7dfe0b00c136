use crate::domain::Listing;
use crate::templates::{components::contact_form, site_layout};
use maud::{html, Markup};

pub fn listing_page(listing: &Listing) -> Markup {
    let details = &listing.details;

    site_layout(
        &format!("{} | {}", listing.address, listing.price),
        html! {
            article class="listing-detail" {
                img src=(listing.cover_image()) alt=(listing.address);
                h1 { (listing.address) }
                h2 class="muted" { (listing.price) }

                ul class="facts" {
                    li { (listing.beds) " beds" }
                    li { (listing.baths) " baths" }
                    li { (listing.sqft) " sqft" }
                    li { "Built in " (listing.year_built) }
                    @if listing.lot_size > 0.0 {
                        li { "Lot: " (listing.lot_size) " acres" }
                    }
                    li { "Type: " (listing.property_type) }
                    li {
                        "Garage: " (format!("{:.2}", listing.garage_spaces))
                        @if listing.garage_spaces == 1.0 { " space" } @else { " spaces" }
                    }
                    li { "Status: " (listing.status) }
                    @if let Some(days) = details.days_on_market {
                        li { (days) " days on market" }
                    }
                }

                @if let Some(description) = &details.description {
                    p class="description" { (description) }
                }

                @if let Some(location) = &details.location {
                    @if let Some(county) = &location.county {
                        p class="muted" { (county) " County" }
                    }
                }

                @if let Some(school) = &details.school {
                    section class="schools" {
                        h3 { "Schools" }
                        ul {
                            @if let Some(v) = &school.district { li { "District: " (v) } }
                            @if let Some(v) = &school.elementary { li { "Elementary: " (v) } }
                            @if let Some(v) = &school.middle { li { "Middle: " (v) } }
                            @if let Some(v) = &school.high { li { "High: " (v) } }
                        }
                    }
                }

                @if let Some(hoa) = &details.hoa {
                    @if let Some(fee) = hoa.fee {
                        p { "HOA: $" (format!("{fee:.0}")) @if let Some(f) = &hoa.frequency { " " (f) } }
                    }
                }

                @if let Some(agent) = &details.agent {
                    @if let Some(name) = &agent.name {
                        p class="muted" { "Listed by " (name) }
                    }
                }
            }

            (contact_form(Some(listing)))
        },
    )
}

pub fn listing_not_found_page() -> Markup {
    site_layout(
        "Listing Not Found",
        html! {
            h1 { "Listing Not Found" }
            p { "Sorry, we could not find the listing you are looking for." }
            p { a href="/listings" { "← Back to listings" } }
        },
    )
}
