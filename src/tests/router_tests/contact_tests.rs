use crate::router::handle;
use crate::tests::utils::{body_string, test_state, FailingMailer, FakeTransport, RecordingMailer};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;
use std::sync::Arc;

fn post(uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json(body: &str) -> Request<Body> {
    post("/api/contact", "application/json", body)
}

fn post_form(body: &str) -> Request<Body> {
    post("/contact", "application/x-www-form-urlencoded", body)
}

fn json_body(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("response should be JSON")
}

#[test]
fn api_contact_sends_valid_inquiry() {
    let mailer = RecordingMailer::default();
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(mailer.clone()));

    let resp = handle(
        post_json(
            r#"{"name":"Dana Smith","email":"dana@example.com","message":"Is it still available?",
                "listingId":"1005192","listingAddress":"9 River Rd","listingPrice":"$325,000"}"#,
        ),
        &state,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(json_body(resp), serde_json::json!({ "success": true }));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].listing_id.as_deref(), Some("1005192"));
    assert!(sent[0].email_text().contains("--- PROPERTY INQUIRY ---"));
}

#[test]
fn api_contact_rejects_missing_fields() {
    let mailer = RecordingMailer::default();
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(mailer.clone()));

    let resp = handle(post_json(r#"{"name":"Dana","message":"Hi"}"#), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(
        json_body(resp),
        serde_json::json!({ "success": false, "error": "All fields are required." })
    );
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[test]
fn api_contact_rejects_malformed_json() {
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(RecordingMailer::default()));

    let resp = handle(post_json("{not json"), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp)["success"], false);
}

#[test]
fn api_contact_reports_provider_failure() {
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(FailingMailer));

    let resp = handle(
        post_json(r#"{"name":"Dana","email":"dana@example.com","message":"Hi"}"#),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(
        json_body(resp),
        serde_json::json!({ "success": false, "error": "Failed to send message." })
    );
}

#[test]
fn contact_form_joins_names_and_confirms() {
    let mailer = RecordingMailer::default();
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(mailer.clone()));

    let resp = handle(
        post_form(
            "firstName=Dana&lastName=Smith&email=dana%40example.com&message=Looking+to+buy\
             &timeframe=3-6months&isFirstTimeBuyer=on&agreeToTerms=on",
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Message sent successfully!"));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent[0].name, "Dana Smith");
    assert_eq!(sent[0].email, "dana@example.com");
    assert!(sent[0].is_first_time_buyer);
    assert_eq!(
        sent[0].email_subject(),
        "New contact form submission from Dana Smith"
    );
}

#[test]
fn contact_form_shows_validation_error_inline() {
    let mailer = RecordingMailer::default();
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(mailer.clone()));

    let resp = handle(post_form("firstName=Dana&email=dana%40example.com"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("All fields are required."));
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[test]
fn contact_form_shows_send_failure_inline() {
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(FailingMailer));

    let resp = handle(
        post_form("firstName=Dana&lastName=Smith&email=dana%40example.com&message=Hi"),
        &state,
    )
    .unwrap();
    assert!(body_string(resp).contains("Failed to send message."));
}
