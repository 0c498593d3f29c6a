//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::geocode::GeocoderConfig;
use crate::opendata::OpenDataConfig;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to something unusable
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Serve the fallback dataset without contacting Open Data.
    pub fallback_only: bool,

    /// File replacing the bundled fallback dataset.
    pub fallback_path: Option<PathBuf>,

    pub open_data: OpenDataConfig,
    pub geocoder: GeocoderConfig,
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Recognized variables:
    /// - `LOCATOR_BIND_ADDR` (default `127.0.0.1:3000`)
    /// - `LOCATOR_STATIC_DIR` (default `static`)
    /// - `LOCATOR_FALLBACK_ONLY` (`1`/`true`/`yes` to skip live data)
    /// - `LOCATOR_FALLBACK_PATH`
    /// - `LOCATOR_CACHE_TTL_SECS` (default 600)
    /// - `NYC_OPEN_DATA_APP_TOKEN`
    /// - `NOMINATIM_BASE_URL`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = match var("LOCATOR_BIND_ADDR") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "LOCATOR_BIND_ADDR",
                value: v.clone(),
            })?,
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let fallback_only = match var("LOCATOR_FALLBACK_ONLY") {
            Some(v) => parse_flag(&v).ok_or(ConfigError::Invalid {
                name: "LOCATOR_FALLBACK_ONLY",
                value: v,
            })?,
            None => false,
        };

        let mut cache = CacheConfig::default();
        if let Some(v) = var("LOCATOR_CACHE_TTL_SECS") {
            let secs: u64 = v.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "LOCATOR_CACHE_TTL_SECS",
                value: v.clone(),
            })?;
            cache = cache.with_facilities_ttl(Duration::from_secs(secs));
        }

        let mut open_data = OpenDataConfig::new();
        if let Some(token) = var("NYC_OPEN_DATA_APP_TOKEN") {
            open_data = open_data.with_app_token(token.trim());
        }

        let mut geocoder = GeocoderConfig::new();
        if let Some(url) = var("NOMINATIM_BASE_URL") {
            geocoder = geocoder.with_base_url(url.trim());
        }

        Ok(Self {
            bind_addr,
            static_dir: var("LOCATOR_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            fallback_only,
            fallback_path: var("LOCATOR_FALLBACK_PATH").map(PathBuf::from),
            open_data,
            geocoder,
            cache,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
