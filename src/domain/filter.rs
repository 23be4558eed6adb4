use crate::catalog::Property;
use crate::domain::criteria::Criteria;
use crate::domain::summary::PropertySummary;

/// Keeps the properties matching `criteria` and projects them to summaries.
///
/// Catalog order is preserved. Nothing here can fail: the input is already
/// validated.
pub fn filter_and_project(catalog: &[Property], criteria: &Criteria) -> Vec<PropertySummary> {
    catalog
        .iter()
        .filter(|p| criteria.matches(p))
        .map(PropertySummary::from)
        .collect()
}
