use crate::domain::Listing;
use crate::templates::pages::home::featured_listings;
use crate::templates::site_layout;
use maud::{html, Markup};

pub fn about_page(listings: &[Listing]) -> Markup {
    site_layout(
        "About",
        html! {
            h1 { "About Jeremy Kopp" }
            p {
                "Jeremy Kopp is a dedicated real estate agent serving Fargo, Moorhead, and West Fargo. \
                 With years of experience in the local housing market, Jeremy helps clients buy and \
                 sell homes with confidence and ease."
            }
            p {
                "Jeremy's approach focuses on clear communication, honesty, and putting his clients' \
                 needs first. Whether you are a first-time buyer or looking to sell your home, Jeremy \
                 is committed to providing a smooth and successful experience."
            }
            p {
                "Outside of real estate, Jeremy enjoys exploring the local community, staying up to \
                 date with market trends, and helping people achieve their homeownership dreams."
            }
            (featured_listings(listings))
        },
    )
}
