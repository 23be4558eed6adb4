pub mod catalog_error;
pub mod loader;
pub mod models;
pub mod source;
pub mod validate;

pub use catalog_error::CatalogError;
pub use loader::{load_catalog, Catalog};
pub use models::Property;
pub use source::{CatalogSource, HttpSource, JsonFileSource, StaticSource};
