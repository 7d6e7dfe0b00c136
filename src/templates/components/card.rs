use crate::domain::Listing;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// CSS class for the status badge.
pub fn status_tone(status: &str) -> &'static str {
    match status {
        "For Sale" => "status status-sale",
        "Sold" => "status status-sold",
        _ => "status status-other",
    }
}

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="listing-card" {
            a href={ "/listings/" (listing.id) } {
                img src=(listing.cover_image()) alt=(listing.address) loading="lazy";
                div class="listing-head" {
                    strong class="price" { (listing.price) }
                    " "
                    span class=(status_tone(&listing.status)) { (listing.status) }
                }
                p class="address" { (listing.address) }
                p class="facts" { (listing.summary()) }
                p class="muted" {
                    "Built " (listing.year_built) " • " (listing.property_type)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idx::fallback_listings;

    #[test]
    fn status_tones() {
        assert_eq!(status_tone("For Sale"), "status status-sale");
        assert_eq!(status_tone("Sold"), "status status-sold");
        assert_eq!(status_tone("Pending"), "status status-other");
    }

    #[test]
    fn listing_card_links_to_detail() {
        let listing = &fallback_listings()[0];
        let html = listing_card(listing).into_string();
        assert!(html.contains(&format!("href=\"/listings/{}\"", listing.id)));
        assert!(html.contains("$289,900"));
        assert!(html.contains("3 beds • 2 baths • 1,820 sqft"));
    }
}
