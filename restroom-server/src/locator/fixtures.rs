//! Shared builders for locator tests.

use proptest::prelude::*;

use crate::domain::{Facility, FacilityId, FacilityType};

pub fn facility(id: i64) -> Facility {
    Facility {
        id: FacilityId::Number(id),
        name: format!("Restroom {id}"),
        latitude: 40.7 + id as f64 * 0.001,
        longitude: -73.99,
        address: "Address not available".into(),
        hours: "Hours vary".into(),
        is_accessible: false,
        is_open: true,
        rating: 4.0,
        facility_type: FacilityType::Public,
        distance: None,
    }
}

pub fn open(id: i64, accessible: bool, distance: Option<f64>) -> Facility {
    Facility {
        is_accessible: accessible,
        distance,
        ..facility(id)
    }
}

pub fn closed(id: i64, distance: Option<f64>) -> Facility {
    Facility {
        is_open: false,
        distance,
        ..facility(id)
    }
}

pub fn ids(facilities: &[Facility]) -> Vec<i64> {
    facilities
        .iter()
        .map(|f| match f.id {
            FacilityId::Number(n) => n,
            FacilityId::Text(_) => -1,
        })
        .collect()
}

fn facility_type() -> impl Strategy<Value = FacilityType> {
    prop_oneof![
        Just(FacilityType::Public),
        Just(FacilityType::Park),
        Just(FacilityType::Apt)
    ]
}

/// Facilities with unique numeric ids and a mix of attributes.
pub fn facilities_strategy() -> impl Strategy<Value = Vec<Facility>> {
    prop::collection::vec(
        (
            any::<bool>(),
            any::<bool>(),
            prop::option::weighted(0.8, 0.0f64..10.0),
            facility_type(),
        ),
        0..30,
    )
    .prop_map(|attrs| {
        attrs
            .into_iter()
            .enumerate()
            .map(|(i, (is_open, is_accessible, distance, facility_type))| Facility {
                is_open,
                is_accessible,
                distance,
                facility_type,
                ..facility(i as i64)
            })
            .collect()
    })
}
