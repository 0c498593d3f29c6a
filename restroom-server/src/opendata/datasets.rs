//! Catalogue of the restroom datasets on NYC Open Data.

use crate::domain::FacilityType;

/// One Socrata dataset and the facility type its records become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dataset {
    /// Socrata dataset identifier (e.g. `vzrx-zg6z`).
    pub id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Type assigned to every record from this dataset.
    pub facility_type: FacilityType,
    /// Maximum number of records to request.
    pub limit: u32,
}

/// Public Restrooms (Operational).
pub const OPERATIONAL: Dataset = Dataset {
    id: "vzrx-zg6z",
    title: "Public Restrooms (Operational)",
    facility_type: FacilityType::Public,
    limit: 500,
};

/// Automatic Public Toilets.
pub const AUTOMATIC: Dataset = Dataset {
    id: "uzgy-xh4j",
    title: "Automatic Public Toilets",
    facility_type: FacilityType::Apt,
    limit: 100,
};

/// Directory Of Toilets In Public Parks.
pub const PARKS: Dataset = Dataset {
    id: "hjae-yuav",
    title: "Directory Of Toilets In Public Parks",
    facility_type: FacilityType::Park,
    limit: 500,
};

/// Every dataset the locator loads, in merge order.
pub const NYC_DATASETS: [Dataset; 3] = [OPERATIONAL, AUTOMATIC, PARKS];
