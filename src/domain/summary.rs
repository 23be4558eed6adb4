use crate::catalog::Property;
use serde::Serialize;

/// The card-sized view of a property used by the listing page and API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub price: f64,
    pub location: SummaryLocation,
    pub destination_id: Option<String>,
    pub rating: f64,
    pub thumbnail: String,
    pub short_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLocation {
    pub city: String,
    pub state: String,
}

impl From<&Property> for PropertySummary {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id.clone(),
            slug: p.slug.clone(),
            title: p.title.clone(),
            price: p.price,
            location: SummaryLocation {
                city: p.location.city.clone(),
                state: p.location.state.clone(),
            },
            destination_id: p.location.destination_id.clone(),
            rating: p.rating,
            thumbnail: p.thumbnail.clone(),
            short_description: short_description(&p.description),
        }
    }
}

/// First sentence of `description`: everything before the first `.`, with a
/// `.` appended. Without a `.` the whole text gets one.
pub fn short_description(description: &str) -> String {
    let first = description.split('.').next().unwrap_or(description);
    format!("{first}.")
}
