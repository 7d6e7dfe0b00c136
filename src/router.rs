use crate::domain::inquiry::MISSING_FIELDS;
use crate::domain::{FilterCriteria, Inquiry};
use crate::errors::{ResultResp, ServerError};
use crate::filter::{apply_filters, Predicate};
use crate::responses::{html_response, html_response_with_status, json_response};
use crate::state::AppState;
use crate::templates;
use crate::templates::pages::ListingsVm;
use astra::Request;
use serde_json::json;
use std::collections::HashMap;
use std::io::Read;
use tracing::{error, info, warn};

pub const SEND_FAILED: &str = "Failed to send message.";
const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let listings = state.listings.fetch_listings(&state.listings.default_query());
            html_response(templates::pages::home_page(&listings))
        }
        ("GET", "/about") => {
            let listings = state.listings.fetch_listings(&state.listings.default_query());
            html_response(templates::pages::about_page(&listings))
        }
        ("GET", "/blog") => html_response(templates::pages::blog_page()),
        ("GET", "/contact") => html_response(templates::pages::contact_page()),

        ("GET", "/listings") => listings(&req, state),
        ("GET", p) if p.starts_with("/listings/") => {
            listing_detail(&p["/listings/".len()..], state)
        }

        ("POST", "/contact") => contact_form(req, state),
        ("POST", "/api/contact") => contact_api(req, state),

        _ => Err(ServerError::NotFound),
    }
}

fn listings(req: &Request, state: &AppState) -> ResultResp {
    let predicate = Predicate::for_today(&state.categories);
    let criteria = FilterCriteria::from_query(&parse_query(req), predicate.current_year())?;

    let baseline = state.listings.fetch_listings(&state.listings.default_query());
    let outcome = apply_filters(&baseline, &criteria, &state.listings, &predicate);

    let vm = ListingsVm {
        outcome: &outcome,
        total: baseline.len(),
        criteria: &criteria,
        current_year: predicate.current_year(),
    };

    // htmx swaps only the results region
    if req.headers().contains_key("HX-Request") {
        html_response(templates::pages::listings_results(&vm))
    } else {
        html_response(templates::pages::listings_page(&vm))
    }
}

fn listing_detail(id: &str, state: &AppState) -> ResultResp {
    let listing = if is_listing_id(id) {
        state.listings.fetch_listing(id)
    } else {
        warn!("Rejected listing id {id:?}");
        None
    };

    match listing {
        Some(listing) => html_response(templates::pages::listing_page(&listing)),
        None => html_response_with_status(404, templates::pages::listing_not_found_page()),
    }
}

/// Ids are MLS numbers, listing ids or derived `gen-` ids.
fn is_listing_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Form post from the contact form. Always answers with an HTML fragment
/// for the `#contact-result` region.
fn contact_form(req: Request, state: &AppState) -> ResultResp {
    let body = read_body(req)?;
    let fields: HashMap<String, String> = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();
    let inquiry = Inquiry::from_form(&fields);

    match deliver(&inquiry, state) {
        Ok(()) => html_response(templates::components::contact_success()),
        Err(ServerError::BadRequest(msg)) => {
            html_response(templates::components::contact_failure(&msg))
        }
        Err(_) => html_response(templates::components::contact_failure(SEND_FAILED)),
    }
}

/// JSON contact endpoint.
fn contact_api(req: Request, state: &AppState) -> ResultResp {
    let body = read_body(req)?;

    let inquiry: Inquiry = match serde_json::from_str(&body) {
        Ok(inquiry) => inquiry,
        Err(e) => {
            warn!("Malformed contact payload: {e}");
            return json_response(400, &json!({ "success": false, "error": MISSING_FIELDS }));
        }
    };

    match deliver(&inquiry, state) {
        Ok(()) => json_response(200, &json!({ "success": true })),
        Err(ServerError::BadRequest(msg)) => {
            json_response(400, &json!({ "success": false, "error": msg }))
        }
        Err(_) => json_response(500, &json!({ "success": false, "error": SEND_FAILED })),
    }
}

fn deliver(inquiry: &Inquiry, state: &AppState) -> Result<(), ServerError> {
    inquiry.validate()?;

    state.mailer.send_inquiry(inquiry).map_err(|e| {
        error!("Failed to send inquiry from {}: {e}", inquiry.email);
        ServerError::from(e)
    })?;

    info!("Inquiry from {} sent", inquiry.email);
    Ok(())
}

fn read_body(req: Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(body)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_ids_are_restricted() {
        assert!(is_listing_id("1005192"));
        assert!(is_listing_id("gen-AbC_d-12"));
        assert!(is_listing_id("fallback-1"));
        assert!(!is_listing_id(""));
        assert!(!is_listing_id("../etc"));
        assert!(!is_listing_id("1 OR 1=1"));
    }
}
