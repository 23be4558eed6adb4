// config.rs
use crate::catalog::{CatalogError, CatalogSource, HttpSource, JsonFileSource};
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum DataLocation {
    File(PathBuf),
    Url(url::Url),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Upper bound on astra worker threads.
    pub workers: usize,
    pub data: DataLocation,
    /// Bounded wait for a remote catalog; exceeding it counts as the source
    /// being unavailable.
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            data: DataLocation::File(PathBuf::from("data/properties.json")),
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub msg: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.var, self.msg)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(v) = lookup("LUXELIST_ADDR") {
            cfg.addr = v.parse().map_err(|e| ConfigError {
                var: "LUXELIST_ADDR",
                msg: format!("{e}"),
            })?;
        }

        if let Some(v) = lookup("LUXELIST_WORKERS") {
            cfg.workers = match v.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError {
                        var: "LUXELIST_WORKERS",
                        msg: format!("expected a positive integer, got '{v}'"),
                    })
                }
            };
        }

        if let Some(v) = lookup("LUXELIST_FETCH_TIMEOUT_SECS") {
            let secs = v.parse::<u64>().map_err(|_| ConfigError {
                var: "LUXELIST_FETCH_TIMEOUT_SECS",
                msg: format!("expected whole seconds, got '{v}'"),
            })?;
            cfg.fetch_timeout = Duration::from_secs(secs);
        }

        if let Some(v) = lookup("LUXELIST_DATA_PATH") {
            cfg.data = DataLocation::File(PathBuf::from(v));
        }

        // A remote catalog takes precedence over a local path.
        if let Some(v) = lookup("LUXELIST_DATA_URL") {
            let url = url::Url::parse(&v).map_err(|e| ConfigError {
                var: "LUXELIST_DATA_URL",
                msg: e.to_string(),
            })?;
            cfg.data = DataLocation::Url(url);
        }

        Ok(cfg)
    }

    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>, CatalogError> {
        let source: Box<dyn CatalogSource> = match &self.data {
            DataLocation::File(path) => Box::new(JsonFileSource::new(path.clone())),
            DataLocation::Url(url) => Box::new(HttpSource::new(url.clone(), self.fetch_timeout)?),
        };
        Ok(source)
    }
}
