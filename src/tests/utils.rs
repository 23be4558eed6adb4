use crate::catalog::validate::validate_record;
use crate::catalog::{Property, StaticSource};
use crate::router::App;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;

/// A complete raw record that passes validation.
pub fn property_json(slug: &str, price: f64, destination: Option<&str>) -> Value {
    let mut record = json!({
        "id": format!("id-{slug}"),
        "slug": slug,
        "title": format!("Property {slug}"),
        "description": "Waterfront living with private beach access. Five bedrooms and a cinema.",
        "price": price,
        "location": {
            "city": "Dubai",
            "state": "Dubai",
            "country": "United Arab Emirates",
            "address": "Frond N, Palm Jumeirah"
        },
        "rating": 4.8,
        "thumbnail": format!("/images/{slug}/thumb.jpg"),
        "images": {
            "main": format!("/images/{slug}/main.jpg"),
            "gallery": [
                format!("/images/{slug}/1.jpg"),
                format!("/images/{slug}/2.jpg")
            ]
        },
        "features": { "bedrooms": 5, "bathrooms": 6, "area": 12000, "parking": 4 },
        "amenities": ["Private Pool", "Beach Access"],
        "propertyType": "villa",
        "status": "for-sale",
        "yearBuilt": 2019,
        "contactInfo": {
            "agent": "Layla Haddad",
            "phone": "+971 4 555 0100",
            "email": "layla@luxelist.ae"
        }
    });

    if let Some(dest) = destination {
        record["location"]["destinationId"] = json!(dest);
    }
    record
}

/// The same record, already validated.
pub fn property(slug: &str, price: f64, destination: Option<&str>) -> Property {
    validate_record(&property_json(slug, price, destination)).expect("fixture record is valid")
}

/// Three valid records and one malformed one, in a fixed order.
pub fn fixture_source() -> StaticSource {
    let mut broken = property_json("broken-listing", 20_000_000.0, Some("dubai"));
    broken["rating"] = json!("five stars");

    let mut estate = property_json("saadiyat-estate", 50_000_000.0, Some("abu-dhabi"));
    estate["location"]["city"] = json!("Abu Dhabi");
    estate["location"]["state"] = json!("Abu Dhabi");
    estate["status"] = json!("sold");

    StaticSource::from_records(vec![
        property_json("marina-loft", 30_000_000.0, Some("dubai")),
        broken,
        property_json("palm-villa", 40_000_000.0, Some("dubai")),
        estate,
    ])
}

pub fn fixture_app() -> App {
    App::new(Box::new(fixture_source()))
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
