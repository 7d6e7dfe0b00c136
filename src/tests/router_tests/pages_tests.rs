use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, test_state, FakeTransport, RecordingMailer};
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_features_listings() {
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(RecordingMailer::default()));

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Your Trusted Fargo Real Estate Expert"));
    assert!(body.contains("Featured Listings"));
    // offline: the fallback set is featured
    assert!(body.contains("1421 8th St S"));
}

#[test]
fn static_pages_render() {
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(RecordingMailer::default()));

    for (uri, marker) in [
        ("/about", "About Jeremy Kopp"),
        ("/blog", "Blog Coming Soon"),
        ("/contact", "Contact Jeremy Kopp"),
    ] {
        let resp = handle(get(uri), &state).expect("Handler failed");
        assert_eq!(resp.status(), 200, "{uri}");
        assert!(body_string(resp).contains(marker), "{uri}");
    }
}

#[test]
fn contact_page_has_general_form() {
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(RecordingMailer::default()));

    let body = body_string(handle(get("/contact"), &state).unwrap());
    assert!(body.contains(r#"hx-post="/contact""#));
    assert!(body.contains(r#"name="priceRange""#));
}

#[test]
fn unknown_routes_are_not_found() {
    let state = test_state(Arc::new(FakeTransport::offline()), Box::new(RecordingMailer::default()));

    assert!(matches!(handle(get("/nope"), &state), Err(ServerError::NotFound)));

    let delete = Request::builder()
        .method(Method::DELETE)
        .uri("/listings")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(delete, &state), Err(ServerError::NotFound)));
}
