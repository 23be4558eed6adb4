use serde::{Deserialize, Serialize};

// property
//  ├── id, slug, title, description
//  ├── price, rating, yearBuilt
//  ├── location
//  │    ├── city, state, country, address
//  │    └── destinationId (optional)
//  ├── thumbnail
//  ├── images
//  │    ├── main
//  │    └── gallery[]
//  ├── features
//  │    └── bedrooms, bathrooms, area, parking
//  ├── amenities[]
//  ├── propertyType, status
//  └── contactInfo
//       └── agent, phone, email

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: Location,
    pub rating: f64,
    pub thumbnail: String,
    pub images: Images,
    pub features: Features,
    pub amenities: Vec<String>,
    pub property_type: String,
    pub status: PropertyStatus,
    pub year_built: f64,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Images {
    pub main: String,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub area: f64,
    pub parking: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub agent: String,
    pub phone: String,
    pub email: String,
}

/// Listing status. Both record shapes in circulation are understood
/// (`for-sale`/`for-rent` and `available`/`sold`/`pending`); anything else is
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyStatus {
    ForSale,
    ForRent,
    Available,
    Sold,
    Pending,
    Other(String),
}

impl PropertyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyStatus::ForSale => "for-sale",
            PropertyStatus::ForRent => "for-rent",
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Pending => "pending",
            PropertyStatus::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
            PropertyStatus::Available => "Available",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Other(s) => s,
        }
    }

    /// Whether the property can still be bought or rented.
    pub fn is_on_market(&self) -> bool {
        matches!(
            self,
            PropertyStatus::ForSale | PropertyStatus::ForRent | PropertyStatus::Available
        )
    }
}

impl From<String> for PropertyStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "for-sale" => PropertyStatus::ForSale,
            "for-rent" => PropertyStatus::ForRent,
            "available" => PropertyStatus::Available,
            "sold" => PropertyStatus::Sold,
            "pending" => PropertyStatus::Pending,
            _ => PropertyStatus::Other(s),
        }
    }
}

impl From<PropertyStatus> for String {
    fn from(status: PropertyStatus) -> Self {
        status.as_str().to_string()
    }
}
