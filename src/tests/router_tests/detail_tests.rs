// src/tests/router_tests/detail_tests.rs

use crate::catalog::StaticSource;
use crate::errors::ServerError;
use crate::router::{handle, App};
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, fixture_app, get, property_json};

#[test]
fn detail_page_renders_the_full_record() {
    let app = fixture_app();
    let resp = handle(get("/properties/palm-villa"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<title>Property palm-villa | LuxeList Dubai</title>"));
    assert!(body.contains("Five bedrooms and a cinema"));
    assert!(body.contains("Layla Haddad"));
    assert!(body.contains("12000 sq ft"));
    assert!(body.contains("4 spots"));
    assert!(body.contains("Private Pool"));
    assert!(body.contains("/images/palm-villa/2.jpg"));
    assert!(body.contains("application/ld+json"));
}

#[test]
fn missing_slug_is_not_found() {
    let app = fixture_app();
    assert!(matches!(
        handle(get("/properties/nonexistent"), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(handle(get("/properties/"), &app), Err(ServerError::NotFound)));
}

#[test]
fn percent_encoded_slug_is_decoded_before_lookup() {
    let app = App::new(Box::new(StaticSource::from_records(vec![property_json(
        "villa-café",
        1.0,
        None,
    )])));

    let resp = handle(get("/properties/villa-caf%C3%A9"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Property villa-café"));

    assert!(matches!(
        handle(get("/properties/villa-caf%FF"), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn record_failing_validation_is_not_found() {
    let app = fixture_app();
    assert!(matches!(
        handle(get("/properties/broken-listing"), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn not_found_renders_a_404_page() {
    let resp = html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Property Not Found"));
}
