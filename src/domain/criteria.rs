use crate::catalog::Property;
use crate::geos::PriceBand;

/// User-selected filters. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub destination_id: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl Criteria {
    pub fn new(destination_id: Option<String>, band: &PriceBand) -> Self {
        Self {
            destination_id,
            min_price: band.min,
            max_price: band.max,
        }
    }

    /// All supplied constraints must hold. Price bounds are inclusive and the
    /// destination comparison is exact (case-sensitive).
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(dest) = &self.destination_id {
            if property.location.destination_id.as_deref() != Some(dest.as_str()) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }
        true
    }
}
