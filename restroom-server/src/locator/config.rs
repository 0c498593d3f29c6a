//! Filter configuration for the regular display mode.

use crate::domain::{Coordinates, TypeFilter};

/// Independent filter options, combined with logical AND.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterConfig {
    /// Keep only facilities considered open.
    pub open_now: bool,

    /// Keep only accessible facilities.
    pub accessible_only: bool,

    /// Maximum distance in miles. Zero (or less) disables the option.
    /// Facilities without a distance always pass.
    pub max_distance: f64,

    /// Keep only one category, or all of them.
    pub facility_type: TypeFilter,
}

impl FilterConfig {
    /// Whether the distance option is active.
    pub fn has_distance_limit(&self) -> bool {
        self.max_distance > 0.0
    }

    /// The conjunction of two configurations.
    ///
    /// Returns `None` when both select a different single category, since no
    /// facility could satisfy both.
    pub fn merge(&self, other: &FilterConfig) -> Option<FilterConfig> {
        let facility_type = match (self.facility_type, other.facility_type) {
            (TypeFilter::All, t) | (t, TypeFilter::All) => t,
            (TypeFilter::Only(a), TypeFilter::Only(b)) if a == b => TypeFilter::Only(a),
            _ => return None,
        };

        let max_distance = match (self.has_distance_limit(), other.has_distance_limit()) {
            (true, true) => self.max_distance.min(other.max_distance),
            (true, false) => self.max_distance,
            (false, true) => other.max_distance,
            (false, false) => 0.0,
        };

        Some(FilterConfig {
            open_now: self.open_now || other.open_now,
            accessible_only: self.accessible_only || other.accessible_only,
            max_distance,
            facility_type,
        })
    }
}

/// Everything needed to compute one display list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayRequest {
    /// User or searched location, if known.
    pub reference: Option<Coordinates>,

    /// Urgent mode: open-only, accessibility then proximity. Overrides
    /// `filters`.
    pub urgent: bool,

    /// Regular-mode filters.
    pub filters: FilterConfig,
}
