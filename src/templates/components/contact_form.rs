use crate::domain::Listing;
use crate::templates::components::notice::{notice, Tone};
use maud::{html, Markup};

pub const SUCCESS_TITLE: &str = "Message sent successfully!";

/// The inquiry form. With a listing it becomes a property inquiry: the
/// listing is carried in hidden fields and subject and message are
/// prefilled; without one it asks for buyer preferences instead.
pub fn contact_form(listing: Option<&Listing>) -> Markup {
    let subject = listing.map(|l| format!("Inquiry about {}", l.address));
    let message = listing.map(|l| {
        format!(
            "I'm interested in learning more about the property at {} listed at {}. Please contact me with more information.",
            l.address, l.price
        )
    });

    html! {
        div class="contact" {
            @if let Some(l) = listing {
                div class="card" {
                    h3 { "Property Inquiry" }
                    p { (l.address) }
                    p class="muted" { (l.price) }
                }
            }

            form class="contact-form" method="post" action="/contact"
                hx-post="/contact" hx-target="#contact-result" hx-swap="innerHTML"
                hx-disabled-elt="button"
            {
                @if let Some(l) = listing {
                    input type="hidden" name="listingId" value=(l.id);
                    input type="hidden" name="listingAddress" value=(l.address);
                    input type="hidden" name="listingPrice" value=(l.price);
                }

                label { "First name *" input type="text" name="firstName" required; }
                label { "Last name *" input type="text" name="lastName" required; }
                label { "Email *" input type="email" name="email" autocomplete="email" required; }
                label { "Phone" input type="tel" name="phone" placeholder="(701) 555-0123"; }

                fieldset {
                    legend { "Preferred Contact Method" }
                    @for (value, text) in [("email", "Email"), ("phone", "Phone"), ("either", "Either")] {
                        label {
                            input type="radio" name="contactMethod" value=(value) checked[value == "email"];
                            (text)
                        }
                    }
                }

                label {
                    "Subject"
                    input type="text" name="subject" placeholder="What can Jeremy help you with?"
                        value=[subject];
                }

                @if listing.is_none() {
                    (buyer_preferences())
                }

                label {
                    "Message *"
                    textarea name="message" rows="6" required
                        placeholder="Tell Jeremy about your real estate needs..."
                    { @if let Some(m) = &message { (m) } }
                }

                label {
                    input type="checkbox" name="agreeToTerms" required;
                    "I agree to be contacted by Jeremy Kopp regarding my real estate inquiry. \
                     I understand that I can opt out at any time. *"
                }

                button type="submit" class="btn" { "Send Message" }
            }

            div id="contact-result" {}
        }
    }
}

fn buyer_preferences() -> Markup {
    html! {
        label {
            "Timeframe"
            select name="timeframe" {
                option value="" { "Select timeframe" }
                option value="immediately" { "Immediately" }
                option value="1-3months" { "1-3 months" }
                option value="3-6months" { "3-6 months" }
                option value="6-12months" { "6-12 months" }
                option value="1year+" { "1+ years" }
                option value="just-looking" { "Just looking" }
            }
        }
        label {
            "Property type"
            select name="propertyType" {
                option value="" { "Select property type" }
                option value="single-family" { "Single Family Home" }
                option value="townhome" { "Townhome" }
                option value="condo" { "Condo" }
                option value="multi-family" { "Multi-family" }
                option value="land" { "Land" }
                option value="commercial" { "Commercial" }
            }
        }
        label {
            "Price range"
            select name="priceRange" {
                option value="" { "Select price range" }
                option value="under-200k" { "Under $200,000" }
                option value="200k-300k" { "$200,000 - $300,000" }
                option value="300k-400k" { "$300,000 - $400,000" }
                option value="400k-500k" { "$400,000 - $500,000" }
                option value="500k-750k" { "$500,000 - $750,000" }
                option value="750k+" { "$750,000+" }
            }
        }
        label {
            input type="checkbox" name="isFirstTimeBuyer";
            "I am a first-time home buyer"
        }
    }
}

pub fn contact_success() -> Markup {
    notice(
        Tone::Success,
        SUCCESS_TITLE,
        "Jeremy will get back to you within 24 hours.",
    )
}

pub fn contact_failure(message: &str) -> Markup {
    notice(
        Tone::Error,
        message,
        "Please try again or call Jeremy directly at (701) 555-0123.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idx::fallback_listings;

    #[test]
    fn general_form_asks_for_preferences() {
        let html = contact_form(None).into_string();
        assert!(html.contains(r#"name="timeframe""#));
        assert!(!html.contains(r#"name="listingId""#));
        assert!(!html.contains("Property Inquiry"));
    }

    #[test]
    fn listing_form_is_prefilled() {
        let listing = &fallback_listings()[0];
        let html = contact_form(Some(listing)).into_string();

        assert!(html.contains(&format!(r#"name="listingId" value="{}""#, listing.id)));
        assert!(html.contains(&format!(r#"value="Inquiry about {}""#, listing.address)));
        assert!(html.contains(&format!(
            "I'm interested in learning more about the property at {} listed at $289,900.",
            listing.address
        )));
        assert!(!html.contains(r#"name="timeframe""#));
    }
}
