use crate::catalog::models::Property;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;

/// Why a single raw record was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotAnObject,
    InvalidField {
        field: String,
        expected: &'static str,
    },
    Deserialize(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAnObject => write!(f, "record is not an object"),
            ValidationError::InvalidField { field, expected } => {
                write!(f, "field '{field}' must be {expected}")
            }
            ValidationError::Deserialize(msg) => write!(f, "could not decode record: {msg}"),
        }
    }
}

impl Error for ValidationError {}

const TEXT_FIELDS: [&str; 7] = [
    "id",
    "slug",
    "title",
    "description",
    "thumbnail",
    "propertyType",
    "status",
];
const NUMBER_FIELDS: [&str; 3] = ["price", "rating", "yearBuilt"];
const LOCATION_FIELDS: [&str; 4] = ["city", "state", "country", "address"];
const FEATURE_FIELDS: [&str; 4] = ["bedrooms", "bathrooms", "area", "parking"];
const CONTACT_FIELDS: [&str; 3] = ["agent", "phone", "email"];

/// Checks a raw catalog entry against the full property contract and decodes it.
///
/// Checks run in a fixed order and stop at the first failure, so the error
/// always names a single field.
pub fn validate_record(record: &Value) -> Result<Property, ValidationError> {
    let obj = record.as_object().ok_or(ValidationError::NotAnObject)?;

    for key in TEXT_FIELDS {
        expect_text(obj, "", key)?;
    }
    for key in NUMBER_FIELDS {
        expect_number(obj, "", key)?;
    }

    let location = expect_object(obj, "location")?;
    for key in LOCATION_FIELDS {
        expect_text(location, "location", key)?;
    }
    match location.get("destinationId") {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(_) => return Err(invalid("location.destinationId", "text")),
    }

    let images = expect_object(obj, "images")?;
    expect_text(images, "images", "main")?;
    expect_text_list(images, "images", "gallery")?;

    let features = expect_object(obj, "features")?;
    for key in FEATURE_FIELDS {
        expect_number(features, "features", key)?;
    }

    expect_text_list(obj, "", "amenities")?;

    let contact = expect_object(obj, "contactInfo")?;
    for key in CONTACT_FIELDS {
        expect_text(contact, "contactInfo", key)?;
    }

    serde_json::from_value(record.clone()).map_err(|e| ValidationError::Deserialize(e.to_string()))
}

fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn invalid(field: impl Into<String>, expected: &'static str) -> ValidationError {
    ValidationError::InvalidField {
        field: field.into(),
        expected,
    }
}

fn expect_text(obj: &Map<String, Value>, parent: &str, key: &str) -> Result<(), ValidationError> {
    match obj.get(key) {
        Some(Value::String(_)) => Ok(()),
        _ => Err(invalid(field_path(parent, key), "text")),
    }
}

fn expect_number(obj: &Map<String, Value>, parent: &str, key: &str) -> Result<(), ValidationError> {
    match obj.get(key) {
        Some(Value::Number(_)) => Ok(()),
        _ => Err(invalid(field_path(parent, key), "a number")),
    }
}

fn expect_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    obj.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| invalid(key, "an object"))
}

fn expect_text_list(
    obj: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<(), ValidationError> {
    let items = obj
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| invalid(field_path(parent, key), "a list"))?;

    match items.iter().position(|v| !v.is_string()) {
        Some(i) => Err(invalid(format!("{}[{i}]", field_path(parent, key)), "text")),
        None => Ok(()),
    }
}
