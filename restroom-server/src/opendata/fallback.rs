//! Bundled fallback dataset.
//!
//! Used when live data is disabled or every live dataset comes back empty.
//! Records keep their raw source shapes and go through the same normalizer
//! as live data.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::FacilityType;

use super::error::OpenDataError;

/// Raw fallback data compiled into the binary.
const BUNDLED: &str = include_str!("../../data/fallback_restrooms.json");

/// Raw fallback records grouped by facility type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FallbackDataset {
    #[serde(default)]
    public: Vec<Value>,
    #[serde(default)]
    park: Vec<Value>,
    #[serde(default)]
    apt: Vec<Value>,
}

impl FallbackDataset {
    /// The dataset bundled with the binary.
    pub fn bundled() -> Result<Self, OpenDataError> {
        Self::from_json(BUNDLED)
    }

    /// Load a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OpenDataError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| OpenDataError::Fallback {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&json)
    }

    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self, OpenDataError> {
        serde_json::from_str(json).map_err(|e| OpenDataError::Fallback {
            message: e.to_string(),
        })
    }

    /// Raw records of one type.
    pub fn records(&self, facility_type: FacilityType) -> &[Value] {
        match facility_type {
            FacilityType::Public => &self.public,
            FacilityType::Park => &self.park,
            FacilityType::Apt => &self.apt,
        }
    }

    /// Total number of raw records.
    pub fn len(&self) -> usize {
        self.public.len() + self.park.len() + self.apt.len()
    }

    /// Whether the dataset has no records at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
