// src/tests/router_tests/api_tests.rs

use crate::catalog::StaticSource;
use crate::router::{handle, App};
use crate::tests::utils::{body_string, fixture_app, get};
use serde_json::{json, Value};

fn get_json(app: &App, uri: &str) -> (u16, Value) {
    let resp = handle(get(uri), app).unwrap();
    let status = resp.status().as_u16();
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert_eq!(content_type, "application/json");

    let body = body_string(resp);
    (status, serde_json::from_str(&body).unwrap())
}

fn slugs(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|s| s["slug"].as_str().unwrap())
        .collect()
}

#[test]
fn list_returns_summaries() {
    let app = fixture_app();
    let (status, list) = get_json(&app, "/api/properties");
    assert_eq!(status, 200);
    assert_eq!(slugs(&list), vec!["marina-loft", "palm-villa", "saadiyat-estate"]);

    let first = &list[0];
    assert_eq!(first["shortDescription"], "Waterfront living with private beach access.");
    assert_eq!(first["location"], json!({ "city": "Dubai", "state": "Dubai" }));
    assert_eq!(first["destinationId"], "dubai");
    assert!(first.get("contactInfo").is_none());
}

#[test]
fn list_applies_price_bounds() {
    let app = fixture_app();

    let (_, list) = get_json(&app, "/api/properties?minPrice=35000000");
    assert_eq!(slugs(&list), vec!["palm-villa", "saadiyat-estate"]);

    let (_, list) = get_json(&app, "/api/properties?minPrice=30000000&maxPrice=40000000");
    assert_eq!(slugs(&list), vec!["marina-loft", "palm-villa"]);

    let (status, list) = get_json(&app, "/api/properties?minPrice=45000000&maxPrice=35000000");
    assert_eq!(status, 200);
    assert_eq!(list, json!([]));
}

#[test]
fn list_destination_is_case_sensitive() {
    let app = fixture_app();

    let (_, list) = get_json(&app, "/api/properties?destination=abu-dhabi");
    assert_eq!(slugs(&list), vec!["saadiyat-estate"]);

    let (_, list) = get_json(&app, "/api/properties?destination=Abu-Dhabi");
    assert_eq!(list, json!([]));
}

#[test]
fn list_rejects_non_numeric_prices() {
    let app = fixture_app();
    let (status, body) = get_json(&app, "/api/properties?maxPrice=cheap");
    assert_eq!(status, 400);
    assert_eq!(body["status"], 400);
}

#[test]
fn detail_returns_the_full_record() {
    let app = fixture_app();
    let (status, property) = get_json(&app, "/api/properties/saadiyat-estate");
    assert_eq!(status, 200);
    assert_eq!(property["slug"], "saadiyat-estate");
    assert_eq!(property["status"], "sold");
    assert_eq!(property["contactInfo"]["agent"], "Layla Haddad");
    assert_eq!(property["location"]["destinationId"], "abu-dhabi");
}

#[test]
fn detail_miss_is_a_json_404() {
    let app = fixture_app();
    let (status, body) = get_json(&app, "/api/properties/nonexistent");
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Not Found");
}

#[test]
fn unavailable_source_is_a_json_503() {
    let app = App::new(Box::new(StaticSource::new(json!({ "unexpected": true }))));
    let (status, body) = get_json(&app, "/api/properties");
    assert_eq!(status, 503);
    assert!(body["error"].as_str().unwrap().starts_with("Listings unavailable"));
}
