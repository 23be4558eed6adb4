use crate::catalog::{load_catalog, Catalog, CatalogSource};
use crate::domain::{filter_and_project, Criteria};
use crate::errors::ServerError;
use crate::geos::{self, DEFAULT_PRICE_BAND};
use crate::responses::{
    html_response, html_response_with_status, json_error_response, json_response, ResultResp,
};
use crate::templates;
use crate::templates::pages::ListingVm;
use astra::Request;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Shared, read-only request context.
pub struct App {
    source: Box<dyn CatalogSource>,
}

impl App {
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Each request works from a freshly loaded catalog.
    fn catalog(&self) -> Result<Catalog, ServerError> {
        Ok(load_catalog(self.source.as_ref())?)
    }
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = parse_query(&req);

    match (method, path) {
        ("GET", "/") => listing(app, &query),
        ("GET", "/api/properties") => Ok(api_list(app, &query).unwrap_or_else(json_error_response)),
        ("GET", p) if p.starts_with("/api/properties/") => {
            let slug = slug_from(p, "/api/properties/");
            Ok(api_detail(app, slug.as_deref()).unwrap_or_else(json_error_response))
        }
        ("GET", p) if p.starts_with("/properties/") => {
            detail(app, slug_from(p, "/properties/").as_deref())
        }
        _ => Err(ServerError::NotFound),
    }
}

/// The single path segment after `prefix`, percent-decoded. Segments that
/// are empty, nested or not valid UTF-8 once decoded yield `None`.
fn slug_from(path: &str, prefix: &str) -> Option<String> {
    let raw = path.strip_prefix(prefix)?.trim_end_matches('/');
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    let slug = percent_decode_str(raw).decode_utf8().ok()?;
    Some(slug.into_owned())
}

fn listing(app: &App, query: &HashMap<String, String>) -> ResultResp {
    let destination = match query.get("destination").map(String::as_str) {
        None | Some("") => None,
        Some(id) if geos::destination_name(id).is_some() => Some(id.to_string()),
        Some(id) => {
            return Err(ServerError::BadRequest(format!(
                "unknown destination '{id}'"
            )))
        }
    };

    let band_code = query
        .get("price")
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PRICE_BAND);
    let band = geos::price_band(band_code)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown price range '{band_code}'")))?;

    let criteria = Criteria::new(destination.clone(), band);

    let (properties, source_unavailable, status) = match app.catalog() {
        Ok(catalog) => (filter_and_project(catalog.properties(), &criteria), false, 200),
        Err(e) => (Vec::new(), true, e.status()),
    };

    let vm = ListingVm {
        properties,
        destination,
        price_band: band.code.to_string(),
        source_unavailable,
    };

    html_response_with_status(status, templates::pages::home_page(&vm))
}

fn detail(app: &App, slug: Option<&str>) -> ResultResp {
    let slug = slug.ok_or(ServerError::NotFound)?;
    let catalog = app.catalog()?;
    let property = catalog.get_by_slug(slug).ok_or_else(|| {
        log::debug!("No property with slug '{slug}'");
        ServerError::NotFound
    })?;

    html_response(templates::pages::property_page(property))
}

fn api_list(app: &App, query: &HashMap<String, String>) -> ResultResp {
    let criteria = Criteria {
        destination_id: query
            .get("destination")
            .filter(|s| !s.is_empty())
            .cloned(),
        min_price: parse_price(query, "minPrice")?,
        max_price: parse_price(query, "maxPrice")?,
    };

    let catalog = app.catalog()?;
    json_response(200, &filter_and_project(catalog.properties(), &criteria))
}

fn api_detail(app: &App, slug: Option<&str>) -> ResultResp {
    let slug = slug.ok_or(ServerError::NotFound)?;
    let catalog = app.catalog()?;
    let property = catalog.get_by_slug(slug).ok_or(ServerError::NotFound)?;

    json_response(200, property)
}

fn parse_price(query: &HashMap<String, String>, key: &str) -> Result<Option<f64>, ServerError> {
    match query.get(key).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(ServerError::BadRequest(format!(
                "{key} must be a number, got '{raw}'"
            ))),
        },
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
