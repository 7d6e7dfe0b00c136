use crate::templates::{components::card, site_layout};
use maud::{html, Markup};

const TOPICS: &[(&str, &str)] = &[
    ("Buying Tips", "Guides for first-time and repeat buyers in the Fargo-Moorhead area."),
    ("Selling Strategies", "Pricing, staging and marketing advice to sell with confidence."),
    ("Market Updates", "Local trends, inventory and pricing across Fargo, Moorhead and West Fargo."),
];

pub fn blog_page() -> Markup {
    site_layout(
        "Real Estate Blog",
        html! {
            h1 { "Real Estate Blog" }
            p class="muted" {
                "Stay up-to-date with the latest real estate trends, home buying and selling tips, \
                 and local market insights for the Fargo-Moorhead area."
            }

            div class="card" {
                h2 { "Blog Coming Soon" }
                p {
                    "Jeremy is preparing valuable content to help you navigate the real estate market. \
                     Check back soon for expert insights on buying and selling homes in the Fargo area."
                }
                h3 { "Get Updates" }
                p {
                    "Want to be notified when new blog posts are published? Get in touch with Jeremy \
                     to stay informed about market updates and real estate tips."
                }
                a href="/contact" class="btn" { "Contact Jeremy" }
            }

            h2 { "Topics We'll Cover" }
            div class="grid" {
                @for (title, blurb) in TOPICS {
                    (card(title, html! { p { (blurb) } }))
                }
            }
        },
    )
}
