// templates/pages/home.rs

use crate::domain::Listing;
use crate::templates::{
    components::{card, listing_card},
    site_layout,
};
use maud::{html, Markup};

/// How many listings the home and about pages feature.
pub const FEATURED_COUNT: usize = 6;

pub fn home_page(listings: &[Listing]) -> Markup {
    site_layout(
        "Fargo Real Estate Agent",
        html! {
            section class="hero" {
                h1 { "Your Trusted Fargo Real Estate Expert" }
                p {
                    "Jeremy Kopp helps families buy and sell homes throughout Fargo, Moorhead, \
                     and West Fargo. Experience personalized service and local expertise that \
                     makes your real estate journey smooth and successful."
                }
                p {
                    a href="/listings" class="btn" { "Browse Homes" }
                    " "
                    a href="/contact" class="btn" { "Get Started Today" }
                }
            }

            section class="services" {
                h2 { "How I Can Help You" }
                p class="muted" {
                    "Whether you're buying your first home or selling a longtime family residence, \
                     I'm here to guide you through every step of the process."
                }
                div class="grid" {
                    (card("Home Buying", html! {
                        p { "Find the perfect home with expert guidance through the entire buying process, from search to closing." }
                    }))
                    (card("Home Selling", html! {
                        p { "Maximize your home's value with strategic pricing, marketing, and negotiation expertise." }
                    }))
                    (card("Market Analysis", html! {
                        p { "Get detailed insights into local market trends and property values to make informed decisions." }
                    }))
                }
            }

            (featured_listings(listings))
        },
    )
}

pub fn featured_listings(listings: &[Listing]) -> Markup {
    html! {
        section class="featured" {
            h2 { "Featured Listings" }
            div class="grid" {
                @for listing in listings.iter().take(FEATURED_COUNT) {
                    (listing_card(listing))
                }
            }
            p { a href="/listings" { "View all listings →" } }
        }
    }
}
