// src/tests/router_tests/listings_tests.rs

use crate::errors::ServerError;
use crate::filter::orchestrator::LOCAL_FILTER_NOTICE;
use crate::router::handle;
use crate::tests::utils::{body_string, test_state, FakeTransport, RecordingMailer};
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

const FEED: &str = r#"[
    {"mlsId": 101, "address": {"full": "150 Low St"}, "listPrice": 150000,
     "property": {"bedrooms": 2, "bathsFull": 1, "type": "RES"}, "mls": {"status": "Active"}},
    {"mlsId": 102, "address": {"full": "300 Mid St"}, "listPrice": 300000,
     "property": {"bedrooms": 3, "bathsFull": 2, "type": "RES"}, "mls": {"status": "Active"}},
    {"mlsId": 103, "address": {"full": "500 High St"}, "listPrice": 500000,
     "property": {"bedrooms": 4, "bathsFull": 3, "type": "CON"}, "mls": {"status": "Pending"}}
]"#;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn listings_page_shows_the_whole_feed() {
    let transport = Arc::new(FakeTransport::default().route("properties", 200, FEED));
    let state = test_state(transport.clone(), Box::new(RecordingMailer::default()));

    let resp = handle(get("/listings"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Showing <strong>3</strong> of 3 properties"));
    assert!(body.contains("150 Low St"));
    assert!(body.contains("$500,000"));
    assert!(!body.contains("Clear all filters"));

    // unrestricted: only the baseline fetch
    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, vec![("limit", "50".to_string())]);
}

#[test]
fn price_filter_keeps_the_middle_listing() {
    let transport = Arc::new(FakeTransport::default().route("properties", 200, FEED));
    let state = test_state(transport.clone(), Box::new(RecordingMailer::default()));

    let resp = handle(get("/listings?minPrice=200000&maxPrice=400000"), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("300 Mid St"));
    assert!(!body.contains("150 Low St"));
    assert!(!body.contains("500 High St"));
    assert!(body.contains("Showing <strong>1</strong> of 3 properties"));
    assert!(body.contains("Clear all filters"));

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[1].1,
        vec![
            ("minprice", "200000".to_string()),
            ("maxprice", "400000".to_string()),
            ("limit", "100".to_string()),
        ]
    );
}

#[test]
fn category_filters_use_synonyms() {
    let transport = Arc::new(FakeTransport::default().route("properties", 200, FEED));
    let state = test_state(transport, Box::new(RecordingMailer::default()));

    let body = body_string(
        handle(get("/listings?status=For+Sale&propertyType=Single+Family"), &state).unwrap(),
    );
    assert!(body.contains("150 Low St"));
    assert!(body.contains("300 Mid St"));
    assert!(!body.contains("500 High St"));

    let body = body_string(handle(get("/listings?propertyType=Condo"), &state).unwrap());
    assert!(body.contains("500 High St"));
    assert!(body.contains("Showing <strong>1</strong> of 3 properties"));
}

#[test]
fn unreachable_api_falls_back_and_filters_locally() {
    let transport = Arc::new(FakeTransport::offline());
    let state = test_state(transport, Box::new(RecordingMailer::default()));

    let body = body_string(handle(get("/listings"), &state).unwrap());
    assert!(body.contains("Showing <strong>5</strong> of 5 properties"));
    assert!(!body.contains(LOCAL_FILTER_NOTICE));

    let body = body_string(handle(get("/listings?minPrice=200000&maxPrice=400000"), &state).unwrap());
    assert!(body.contains(LOCAL_FILTER_NOTICE));
    assert!(body.contains("1421 8th St S"));
    assert!(body.contains("Showing <strong>1</strong> of 5 properties"));
}

#[test]
fn htmx_requests_get_only_the_results() {
    let transport = Arc::new(FakeTransport::default().route("properties", 200, FEED));
    let state = test_state(transport, Box::new(RecordingMailer::default()));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/listings?minBeds=4")
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.starts_with(r#"<section id="results">"#));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("500 High St"));
}

#[test]
fn no_matches_shows_empty_state() {
    let transport = Arc::new(FakeTransport::default().route("properties", 200, FEED));
    let state = test_state(transport, Box::new(RecordingMailer::default()));

    let body = body_string(handle(get("/listings?minPrice=400000&maxPrice=200000"), &state).unwrap());
    assert!(body.contains("No properties found"));
    assert!(body.contains("Showing <strong>0</strong> of 3 properties"));
}

#[test]
fn garbage_criteria_are_a_bad_request() {
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(RecordingMailer::default()));

    let result = handle(get("/listings?minBeds=lots"), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(msg)) if msg.contains("minBeds")));
}

#[test]
fn listing_detail_renders_with_prefilled_inquiry() {
    let transport = Arc::new(FakeTransport::default().route(
        "properties/1005192",
        200,
        r#"{"mlsId": 1005192, "address": {"full": "9 River Rd"}, "listPrice": 325000,
            "property": {"bedrooms": 3, "bathsFull": 2, "area": 1600, "yearBuilt": 2004}}"#,
    ));
    let state = test_state(transport, Box::new(RecordingMailer::default()));

    let resp = handle(get("/listings/1005192"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<h1>9 River Rd</h1>"));
    assert!(body.contains("$325,000"));
    assert!(body.contains("Built in 2004"));
    assert!(body.contains(r#"name="listingId" value="1005192""#));
    assert!(body.contains("Inquiry about 9 River Rd"));
}

#[test]
fn missing_listing_is_a_not_found_page() {
    let transport = Arc::new(FakeTransport::default().route("properties/999", 404, ""));
    let state = test_state(transport, Box::new(RecordingMailer::default()));

    let resp = handle(get("/listings/999"), &state).unwrap();
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Listing Not Found"));
}

#[test]
fn detail_lookup_errors_also_show_not_found() {
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(RecordingMailer::default()));

    let resp = handle(get("/listings/123"), &state).unwrap();
    assert_eq!(resp.status(), 404);
}

#[test]
fn malformed_ids_never_reach_the_api() {
    let transport = Arc::new(FakeTransport::offline());
    let state = test_state(transport.clone(), Box::new(RecordingMailer::default()));

    let resp = handle(get("/listings/bad%20id"), &state).unwrap();
    assert_eq!(resp.status(), 404);
    assert!(transport.calls.lock().unwrap().is_empty());
}
