use std::error::Error;
use std::fmt;

/// Failure to obtain the catalog document as a whole. Any of these aborts the
/// current load; malformed individual records are a [`ValidationError`] instead.
///
/// [`ValidationError`]: super::validate::ValidationError
#[derive(Debug)]
pub enum CatalogError {
    Io(String),
    Network(String),
    Timeout(String),
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(msg) => write!(f, "Could not read catalog: {msg}"),
            CatalogError::Network(msg) => write!(f, "Network error: {msg}"),
            CatalogError::Timeout(msg) => write!(f, "Timed out fetching catalog: {msg}"),
            CatalogError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            CatalogError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for CatalogError {}
