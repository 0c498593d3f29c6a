//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CachedGeocoder, FacilityStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Loaded facilities
    pub facilities: Arc<FacilityStore>,

    /// Place-name search
    pub geocoder: Arc<CachedGeocoder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(facilities: FacilityStore, geocoder: CachedGeocoder) -> Self {
        Self {
            facilities: Arc::new(facilities),
            geocoder: Arc::new(geocoder),
        }
    }
}
