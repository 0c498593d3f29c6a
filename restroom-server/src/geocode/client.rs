//! Nominatim (OpenStreetMap) geocoding client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};

use crate::domain::Coordinates;

use super::error::GeocodeError;

/// Default base URL for the public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Appended to every query to keep results inside the city.
const DEFAULT_REGION_SUFFIX: &str = ", New York City, NY";

/// Nominatim's usage policy requires an identifying user agent.
const DEFAULT_USER_AGENT: &str = concat!("restroom-server/", env!("CARGO_PKG_VERSION"));

/// A resolved place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedPlace {
    #[serde(flatten)]
    pub location: Coordinates,
    pub display_name: String,
}

/// One search hit as returned by Nominatim. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

impl NominatimPlace {
    /// Convert to a validated place.
    pub fn into_place(self) -> Result<GeocodedPlace, GeocodeError> {
        let invalid = || GeocodeError::InvalidCoordinates {
            lat: self.lat.clone(),
            lon: self.lon.clone(),
        };
        let lat: f64 = self.lat.trim().parse().map_err(|_| invalid())?;
        let lon: f64 = self.lon.trim().parse().map_err(|_| invalid())?;
        let location = Coordinates::new(lat, lon).map_err(|_| invalid())?;

        Ok(GeocodedPlace {
            location,
            display_name: self.display_name,
        })
    }
}

/// Configuration for the geocoder.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Text appended to each query
    pub region_suffix: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    /// Create a config for the public Nominatim instance.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            region_suffix: DEFAULT_REGION_SUFFIX.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for Nominatim free-text search.
#[derive(Debug, Clone)]
pub struct Geocoder {
    http: reqwest::Client,
    base_url: String,
    region_suffix: String,
}

impl Geocoder {
    /// Create a new geocoder.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::InvalidUserAgent)?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            region_suffix: config.region_suffix,
        })
    }

    /// The query text sent for a user search.
    pub fn scoped_query(&self, query: &str) -> String {
        format!("{}{}", query.trim(), self.region_suffix)
    }

    /// Resolve free text to a place.
    ///
    /// Blank queries and searches with no results return `Ok(None)`.
    pub async fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>, GeocodeError> {
        if query.trim().is_empty() {
            return Ok(None);
        }

        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", self.scoped_query(query).as_str()),
                ("format", "json"),
                ("limit", "1"),
            ])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}

/// Parse a Nominatim search response, keeping the first hit.
pub fn parse_search_response(body: &str) -> Result<Option<GeocodedPlace>, GeocodeError> {
    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })?;

    places
        .into_iter()
        .next()
        .map(NominatimPlace::into_place)
        .transpose()
}
