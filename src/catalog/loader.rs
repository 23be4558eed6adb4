// catalog/loader.rs
use crate::catalog::models::Property;
use crate::catalog::source::{raw_records, CatalogSource};
use crate::catalog::validate::validate_record;
use crate::catalog::CatalogError;
use serde_json::Value;
use std::collections::HashSet;

/// The trusted, validated property list for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Exact-match lookup. Slugs are unique after loading, so there is at most
    /// one hit.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.slug == slug)
    }
}

/// Fetches the document from `source` and keeps every record that passes
/// validation, in source order.
///
/// Malformed records and repeated slugs are logged and skipped. Only a failure
/// to obtain the document itself is returned as an error.
pub fn load_catalog(source: &dyn CatalogSource) -> Result<Catalog, CatalogError> {
    let document = source.fetch_document().map_err(|e| {
        log::error!("Failed to load catalog from {}: {e}", source.describe());
        e
    })?;
    let records = raw_records(document).map_err(|e| {
        log::error!("Catalog from {} is unusable: {e}", source.describe());
        e
    })?;

    let total = records.len();
    let catalog = build_catalog(records);

    if catalog.len() != total {
        log::warn!(
            "Catalog from {}: {} of {total} records rejected",
            source.describe(),
            total - catalog.len()
        );
    } else {
        log::debug!("Catalog from {}: {total} records", source.describe());
    }

    Ok(catalog)
}

fn build_catalog(records: Vec<Value>) -> Catalog {
    let mut seen = HashSet::new();
    let mut properties = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let slug = record.get("slug").and_then(Value::as_str);

        // The first record carrying a slug owns it, even if that record is
        // later rejected.
        if let Some(slug) = slug {
            if !seen.insert(slug.to_string()) {
                log::warn!("Skipping property #{index}: duplicate slug '{slug}'");
                continue;
            }
        }

        let property = match validate_record(record) {
            Ok(p) => p,
            Err(e) => {
                let slug = slug.unwrap_or("<unknown>");
                log::warn!("Skipping property #{index} ({slug}): {e}");
                continue;
            }
        };

        properties.push(property);
    }

    Catalog { properties }
}
