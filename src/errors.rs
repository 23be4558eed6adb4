// errors.rs
use crate::catalog::CatalogError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or the catalog source.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    SourceUnavailable(String),
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::SourceUnavailable(_) => 503,
            ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::SourceUnavailable(msg) => write!(f, "Listings unavailable: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<CatalogError> for ServerError {
    fn from(err: CatalogError) -> Self {
        ServerError::SourceUnavailable(err.to_string())
    }
}
