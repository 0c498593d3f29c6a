//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Facility;

use super::directions::directions_url;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form and filters.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Facility list fragment.
#[derive(Template)]
#[template(path = "facility_list.html")]
pub struct FacilityListTemplate {
    pub facilities: Vec<FacilityView>,
    pub urgent: bool,
    pub from_fallback: bool,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Facility card view model.
#[derive(Debug, Clone)]
pub struct FacilityView {
    pub name: String,
    pub address: String,
    pub hours: String,
    pub type_tag: &'static str,
    pub type_label: &'static str,
    pub is_accessible: bool,
    pub is_open: bool,
    /// e.g. "0.42 mi"
    pub distance: Option<String>,
    /// e.g. "4.1"
    pub rating: String,
    pub directions_url: String,
}

impl FacilityView {
    pub fn from_facility(facility: &Facility) -> Self {
        Self {
            name: facility.name.clone(),
            address: facility.address.clone(),
            hours: facility.hours.clone(),
            type_tag: facility.facility_type.as_str(),
            type_label: facility.facility_type.label(),
            is_accessible: facility.is_accessible,
            is_open: facility.is_open,
            distance: facility.distance.map(|d| format!("{d:.2} mi")),
            rating: format!("{:.1}", facility.rating),
            directions_url: directions_url(facility.latitude, facility.longitude),
        }
    }
}
