//! The canonical facility record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coordinates, FacilityType};

/// Identifier of a facility.
///
/// Either the id the source dataset provided (textual or numeric) or one
/// synthesized from the type and coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacilityId {
    Number(i64),
    Text(String),
}

impl FacilityId {
    /// Identifier for a record that carries none of its own.
    ///
    /// Two facilities with identical type and coordinates collide.
    pub fn synthesized(facility_type: FacilityType, latitude: f64, longitude: f64) -> Self {
        FacilityId::Text(format!("{facility_type}-{latitude}-{longitude}"))
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityId::Number(n) => write!(f, "{n}"),
            FacilityId::Text(s) => f.write_str(s),
        }
    }
}

/// A restroom in canonical form, produced by normalization.
///
/// Coordinates are always finite and non-zero. `distance` is only set by the
/// distance annotator once a reference point is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub hours: String,
    pub is_accessible: bool,
    pub is_open: bool,
    /// Synthetic rating in [3.5, 4.5), regenerated on every load.
    pub rating: f64,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    /// Miles from the reference point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Facility {
    /// The facility's position.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// A copy of this facility with its distance from `reference` set.
    pub fn with_distance_from(&self, reference: &Coordinates) -> Facility {
        Facility {
            distance: Some(reference.distance_to(&self.coordinates())),
            ..self.clone()
        }
    }

    /// Whether two records describe the same facility, ignoring the
    /// ephemeral rating and the derived distance.
    pub fn same_facility(&self, other: &Facility) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.address == other.address
            && self.hours == other.hours
            && self.is_accessible == other.is_accessible
            && self.is_open == other.is_open
            && self.facility_type == other.facility_type
    }
}
