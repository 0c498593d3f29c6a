//! Normalization of raw dataset records into canonical facilities.
//!
//! Each source dataset names its fields differently. The [`Normalizer`]
//! resolves every canonical field through a [`FieldTable`] and rejects
//! records whose coordinates cannot be resolved.

mod fields;
mod rating;

pub use fields::{AccessibilityRule, Accessor, FieldTable, Truthy, parse_coordinate, parse_text};
pub use rating::{FixedRating, RATING_MAX, RATING_MIN, RandomRating, RatingSource};

use serde_json::Value;
use tracing::debug;

use crate::domain::{Facility, FacilityId, FacilityType};
use crate::hours::is_open_now;

/// Name used when a record has none.
pub const FALLBACK_NAME: &str = "Public Restroom";

/// Address used when a record has none.
pub const FALLBACK_ADDRESS: &str = "Address not available";

/// Hours text used when a record has none.
pub const FALLBACK_HOURS: &str = "Hours vary";

/// Result of normalizing a batch of raw records.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    /// Valid facilities, in input order.
    pub facilities: Vec<Facility>,
    /// Number of records rejected for unusable coordinates.
    pub dropped: usize,
}

/// Converts raw records into [`Facility`] values.
#[derive(Debug, Clone)]
pub struct Normalizer<R = RandomRating> {
    table: FieldTable,
    ratings: R,
}

impl Normalizer<RandomRating> {
    /// Normalizer for the NYC Open Data datasets with random ratings.
    pub fn new() -> Self {
        Self::with_parts(FieldTable::nyc_open_data(), RandomRating)
    }
}

impl Default for Normalizer<RandomRating> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RatingSource> Normalizer<R> {
    /// Build a normalizer from a field table and rating source.
    pub fn with_parts(table: FieldTable, ratings: R) -> Self {
        Self { table, ratings }
    }

    /// The field table in use.
    pub fn table(&self) -> &FieldTable {
        &self.table
    }

    /// Normalize one raw record.
    ///
    /// Returns `None` when either coordinate is missing, zero, or not a
    /// finite number. Zero marks an unset coordinate in the source feeds.
    pub fn normalize(&self, raw: &Value, facility_type: FacilityType) -> Option<Facility> {
        let latitude = self.coordinate(&self.table.latitude, raw)?;
        let longitude = self.coordinate(&self.table.longitude, raw)?;

        let hours = self
            .text(&self.table.hours, raw)
            .unwrap_or_else(|| FALLBACK_HOURS.to_string());
        let is_open = is_open_now(Some(&hours));

        let id = FieldTable::first(&self.table.id, raw)
            .and_then(parse_id)
            .unwrap_or_else(|| FacilityId::synthesized(facility_type, latitude, longitude));

        Some(Facility {
            id,
            name: self
                .text(&self.table.name, raw)
                .unwrap_or_else(|| FALLBACK_NAME.to_string()),
            latitude,
            longitude,
            address: self
                .text(&self.table.address, raw)
                .unwrap_or_else(|| FALLBACK_ADDRESS.to_string()),
            hours,
            is_accessible: self.table.is_accessible(raw),
            is_open,
            rating: self.ratings.rating(),
            facility_type,
            distance: None,
        })
    }

    /// Normalize a batch of records sharing one type, dropping invalid ones.
    pub fn normalize_batch(&self, raws: &[Value], facility_type: FacilityType) -> NormalizedBatch {
        let facilities: Vec<Facility> = raws
            .iter()
            .filter_map(|raw| self.normalize(raw, facility_type))
            .collect();
        let dropped = raws.len() - facilities.len();

        if dropped > 0 {
            debug!(
                %facility_type,
                dropped,
                kept = facilities.len(),
                "dropped records without usable coordinates"
            );
        }

        NormalizedBatch {
            facilities,
            dropped,
        }
    }

    fn coordinate(&self, accessors: &[Accessor], raw: &Value) -> Option<f64> {
        FieldTable::first(accessors, raw)
            .and_then(parse_coordinate)
            .filter(|c| c.is_finite() && *c != 0.0)
    }

    fn text(&self, accessors: &[Accessor], raw: &Value) -> Option<String> {
        accessors
            .iter()
            .filter_map(|a| a.resolve(raw))
            .find_map(parse_text)
    }
}

fn parse_id(value: &Value) -> Option<FacilityId> {
    match value {
        Value::Number(n) => Some(
            n.as_i64()
                .map(FacilityId::Number)
                .unwrap_or_else(|| FacilityId::Text(n.to_string())),
        ),
        Value::String(s) => Some(FacilityId::Text(s.clone())),
        _ => None,
    }
}
