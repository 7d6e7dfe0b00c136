use crate::templates::{components::contact_form, site_layout};
use maud::{html, Markup};

pub fn contact_page() -> Markup {
    site_layout(
        "Contact",
        html! {
            h1 { "Contact Jeremy Kopp" }
            p class="muted" {
                "Have a question about real estate in Fargo, Moorhead, or West Fargo? \
                 Send a message and Jeremy will get back to you as soon as possible."
            }
            ul class="contact-details" {
                li { "Phone: " a href="tel:+17015550123" { "(701) 555-0123" } }
                li { "Email: " a href="mailto:jeremy@jeremykopp.com" { "jeremy@jeremykopp.com" } }
            }
            (contact_form(None))
        },
    )
}
