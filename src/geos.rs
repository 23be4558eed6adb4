// geos.rs
//! Fixed filter vocabularies offered by the listing page.

/// (destination id, display name)
pub const DESTINATIONS: &[(&str, &str)] = &[
    ("dubai", "Dubai"),
    ("abu-dhabi", "Abu Dhabi"),
    ("sharjah", "Sharjah"),
    ("ajman", "Ajman"),
    ("ras-al-khaimah", "Ras Al Khaimah"),
];

/// A named price range; either bound may be open. Prices are in AED.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub code: &'static str,
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub const DEFAULT_PRICE_BAND: &str = "all";

pub const PRICE_BANDS: &[PriceBand] = &[
    PriceBand {
        code: "all",
        label: "All Prices",
        min: None,
        max: None,
    },
    PriceBand {
        code: "below-35m",
        label: "Below 35,000,000 AED",
        min: None,
        max: Some(35_000_000.0),
    },
    PriceBand {
        code: "below-40m",
        label: "Below 40,000,000 AED",
        min: None,
        max: Some(40_000_000.0),
    },
    PriceBand {
        code: "below-45m",
        label: "Below 45,000,000 AED",
        min: None,
        max: Some(45_000_000.0),
    },
    PriceBand {
        code: "above-45m",
        label: "Above 45,000,000 AED",
        min: Some(45_000_000.0),
        max: None,
    },
];

pub fn destination_name(id: &str) -> Option<&'static str> {
    DESTINATIONS
        .iter()
        .find(|(code, _)| *code == id)
        .map(|(_, name)| *name)
}

pub fn price_band(code: &str) -> Option<&'static PriceBand> {
    PRICE_BANDS.iter().find(|b| b.code == code)
}
