//! Facility categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// The source category of a facility.
///
/// Fixed at normalization time from the dataset a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityType {
    /// Public restrooms (operational directory)
    Public,
    /// Toilets in public parks
    Park,
    /// Automatic public toilets
    Apt,
}

impl FacilityType {
    /// All categories, in display order.
    pub const ALL: [FacilityType; 3] = [FacilityType::Public, FacilityType::Park, FacilityType::Apt];

    /// The wire tag (`public`, `park`, `apt`).
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityType::Public => "public",
            FacilityType::Park => "park",
            FacilityType::Apt => "apt",
        }
    }

    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FacilityType::Public => "Public",
            FacilityType::Park => "Park",
            FacilityType::Apt => "APT",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacilityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(FacilityType::Public),
            "park" => Ok(FacilityType::Park),
            "apt" => Ok(FacilityType::Apt),
            _ => Err(DomainError::UnknownFacilityType(s.to_string())),
        }
    }
}

/// Type selection for the filter engine: every category, or just one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(FacilityType),
}

impl TypeFilter {
    /// Whether a facility of the given type passes this filter.
    pub fn matches(&self, facility_type: FacilityType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => *t == facility_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        s.parse().map(TypeFilter::Only)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("all"),
            TypeFilter::Only(t) => t.fmt(f),
        }
    }
}
