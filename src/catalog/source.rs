// catalog/source.rs
use crate::catalog::CatalogError;
use reqwest::blocking::Client;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level key holding the record list in the catalog document.
pub const RECORDS_KEY: &str = "properties";

/// Where the raw catalog document comes from.
///
/// Implementations only fetch and parse the document; record validation is the
/// loader's job.
pub trait CatalogSource: Send + Sync {
    fn fetch_document(&self) -> Result<Value, CatalogError>;

    /// Short human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// Pulls the raw record list out of a catalog document.
pub fn raw_records(document: Value) -> Result<Vec<Value>, CatalogError> {
    match document {
        Value::Object(mut map) => match map.remove(RECORDS_KEY) {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(CatalogError::UnexpectedShape(format!(
                "'{RECORDS_KEY}' is not a list"
            ))),
            None => Err(CatalogError::UnexpectedShape(format!(
                "missing top-level '{RECORDS_KEY}' key"
            ))),
        },
        _ => Err(CatalogError::UnexpectedShape(
            "document is not an object".into(),
        )),
    }
}

/// A catalog stored as a JSON file on local disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileSource {
    fn fetch_document(&self) -> Result<Value, CatalogError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::Io(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&text).map_err(|e| CatalogError::JsonParse(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// A catalog served over HTTP. One attempt per load, bounded by `timeout`.
pub struct HttpSource {
    client: Client,
    url: url::Url,
}

impl HttpSource {
    pub fn new(url: url::Url, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { client, url })
    }
}

impl CatalogSource for HttpSource {
    fn fetch_document(&self) -> Result<Value, CatalogError> {
        let resp = self
            .client
            .get(self.url.as_str())
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout(e.to_string())
                } else {
                    CatalogError::Network(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Network(format!("HTTP {status}")));
        }

        resp.json::<Value>().map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout(e.to_string())
            } else {
                CatalogError::JsonParse(e.to_string())
            }
        })
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

/// An in-memory document. Used for fixtures and for embedding a catalog.
pub struct StaticSource {
    document: Value,
}

impl StaticSource {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    /// Wraps a list of raw records in a `{ "properties": [...] }` document.
    pub fn from_records(records: Vec<Value>) -> Self {
        let mut map = serde_json::Map::new();
        map.insert(RECORDS_KEY.to_string(), Value::Array(records));
        Self::new(Value::Object(map))
    }
}

impl CatalogSource for StaticSource {
    fn fetch_document(&self) -> Result<Value, CatalogError> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        "static document".to_string()
    }
}
