//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, DomainError, Facility, TypeFilter};
use crate::locator::{DisplayRequest, FilterConfig};
use crate::opendata::DataOrigin;

use super::directions::directions_url;

/// Query parameters for listing facilities.
#[derive(Debug, Default, Deserialize)]
pub struct FacilitiesQuery {
    /// Reference latitude (with `lng`)
    pub lat: Option<f64>,

    /// Reference longitude (with `lat`)
    pub lng: Option<f64>,

    /// Urgent mode
    #[serde(default)]
    pub urgent: bool,

    #[serde(default)]
    pub open_now: bool,

    #[serde(default)]
    pub accessible_only: bool,

    /// Miles; absent or 0 disables
    pub max_distance: Option<f64>,

    /// `all`, `public`, `park` or `apt`
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
}

/// Why a facilities query was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("lat and lng must be given together")]
    IncompleteLocation,

    #[error("{0}")]
    InvalidLocation(DomainError),

    #[error("{0}")]
    InvalidType(DomainError),

    #[error("max_distance must be a non-negative number")]
    InvalidDistance,

    #[error("urgent mode needs a location")]
    UrgentWithoutLocation,
}

impl FacilitiesQuery {
    /// Validate the query and turn it into a display request.
    pub fn to_request(&self) -> Result<DisplayRequest, QueryError> {
        let reference = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => {
                Some(Coordinates::new(lat, lng).map_err(QueryError::InvalidLocation)?)
            }
            (None, None) => None,
            _ => return Err(QueryError::IncompleteLocation),
        };

        if self.urgent && reference.is_none() {
            return Err(QueryError::UrgentWithoutLocation);
        }

        let max_distance = self.max_distance.unwrap_or(0.0);
        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(QueryError::InvalidDistance);
        }

        let facility_type = match self.facility_type.as_deref() {
            Some(t) if !t.trim().is_empty() => t.parse().map_err(QueryError::InvalidType)?,
            _ => TypeFilter::All,
        };

        Ok(DisplayRequest {
            reference,
            urgent: self.urgent,
            filters: FilterConfig {
                open_now: self.open_now,
                accessible_only: self.accessible_only,
                max_distance,
                facility_type,
            },
        })
    }
}

/// A facility in list results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityResult {
    #[serde(flatten)]
    pub facility: Facility,

    /// Short category label (Public / Park / APT)
    pub type_label: &'static str,

    /// Google Maps directions link
    pub directions_url: String,
}

impl FacilityResult {
    pub fn from_facility(facility: Facility) -> Self {
        Self {
            type_label: facility.facility_type.label(),
            directions_url: directions_url(facility.latitude, facility.longitude),
            facility,
        }
    }
}

/// Response for a facilities listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityListResponse {
    pub facilities: Vec<FacilityResult>,
    pub count: usize,
    pub urgent: bool,
    /// Whether the data is live or from the fallback dataset
    pub origin: DataOrigin,
    pub loaded_at: DateTime<Utc>,
}

/// Query parameters for geocoding.
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub q: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
