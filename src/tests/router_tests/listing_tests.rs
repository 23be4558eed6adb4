// src/tests/router_tests/listing_tests.rs

use crate::catalog::{JsonFileSource, StaticSource};
use crate::errors::ServerError;
use crate::router::{handle, App};
use crate::tests::utils::{body_string, fixture_app, get};

#[test]
fn listing_shows_every_valid_property_in_order() {
    let app = fixture_app();
    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let marina = body.find("/properties/marina-loft").unwrap();
    let palm = body.find("/properties/palm-villa").unwrap();
    let estate = body.find("/properties/saadiyat-estate").unwrap();
    assert!(marina < palm && palm < estate, "cards out of catalog order");

    assert!(!body.contains("broken-listing"));
    assert!(body.contains("3 properties"));
    assert!(body.contains("AED 30,000,000"));
    assert!(body.contains("Waterfront living with private beach access."));
    assert!(!body.contains("Five bedrooms and a cinema"));
}

#[test]
fn listing_filters_by_destination_and_price_band() {
    let app = fixture_app();

    let body = body_string(handle(get("/?destination=dubai&price=below-35m"), &app).unwrap());
    assert!(body.contains("/properties/marina-loft"));
    assert!(!body.contains("/properties/palm-villa"));
    assert!(!body.contains("/properties/saadiyat-estate"));
    assert!(body.contains("1 property"));

    let body = body_string(handle(get("/?price=above-45m"), &app).unwrap());
    assert!(body.contains("/properties/saadiyat-estate"));
    assert!(!body.contains("/properties/marina-loft"));
}

#[test]
fn price_band_limits_are_inclusive() {
    let app = fixture_app();
    let body = body_string(handle(get("/?price=below-40m"), &app).unwrap());

    assert!(body.contains("/properties/marina-loft"));
    assert!(body.contains("/properties/palm-villa"));
    assert!(!body.contains("/properties/saadiyat-estate"));
}

#[test]
fn listing_keeps_the_selected_filters() {
    let app = fixture_app();
    let body = body_string(handle(get("/?destination=abu-dhabi&price=above-45m"), &app).unwrap());

    assert!(body.contains(r#"<option value="abu-dhabi" selected>"#));
    assert!(body.contains(r#"value="above-45m" checked"#));
}

#[test]
fn no_match_is_an_empty_state_not_an_error() {
    let app = fixture_app();
    let resp = handle(get("/?destination=ajman"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("No Properties Found"));
    assert!(!body.contains("Listings Unavailable"));
}

#[test]
fn empty_destination_means_all_locations() {
    let app = fixture_app();
    let body = body_string(handle(get("/?destination=&price=all"), &app).unwrap());
    assert!(body.contains("3 properties"));
}

#[test]
fn unknown_filter_values_are_bad_requests() {
    let app = fixture_app();

    assert!(matches!(
        handle(get("/?destination=Dubai"), &app),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/?price=below-1m"), &app),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn unavailable_source_renders_an_error_state() {
    let app = App::new(Box::new(JsonFileSource::new("/nonexistent/properties.json")));
    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 503);

    let body = body_string(resp);
    assert!(body.contains("Listings Unavailable"));
    assert!(!body.contains("No Properties Found"));
}

#[test]
fn empty_catalog_renders_the_empty_state() {
    let app = App::new(Box::new(StaticSource::from_records(vec![])));
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("No Properties Found"));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = fixture_app();
    assert!(matches!(handle(get("/admin"), &app), Err(ServerError::NotFound)));
}
