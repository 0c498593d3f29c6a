//! Filter engine for the regular display mode.

use crate::domain::Facility;

use super::config::FilterConfig;

/// Whether a single facility passes every active option.
pub fn passes(facility: &Facility, config: &FilterConfig) -> bool {
    if config.open_now && !facility.is_open {
        return false;
    }
    if config.accessible_only && !facility.is_accessible {
        return false;
    }
    if config.has_distance_limit()
        && facility
            .distance
            .is_some_and(|d| d > config.max_distance)
    {
        return false;
    }
    config.facility_type.matches(facility.facility_type)
}

/// Keep the facilities that pass every active option, preserving order.
///
/// An empty result is not an error. The input is never modified.
pub fn apply_filters(facilities: &[Facility], config: &FilterConfig) -> Vec<Facility> {
    facilities
        .iter()
        .filter(|f| passes(f, config))
        .cloned()
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{FacilityType, TypeFilter};
    use crate::locator::fixtures::facilities_strategy;
    use proptest::prelude::*;

    fn config_strategy() -> impl Strategy<Value = FilterConfig> {
        (
            any::<bool>(),
            any::<bool>(),
            prop_oneof![Just(0.0), 0.1f64..8.0],
            prop_oneof![
                Just(TypeFilter::All),
                Just(TypeFilter::Only(FacilityType::Public)),
                Just(TypeFilter::Only(FacilityType::Park)),
                Just(TypeFilter::Only(FacilityType::Apt))
            ],
        )
            .prop_map(|(open_now, accessible_only, max_distance, facility_type)| FilterConfig {
                open_now,
                accessible_only,
                max_distance,
                facility_type,
            })
    }

    proptest! {
        #[test]
        fn composition_matches_merged_config(
            facilities in facilities_strategy(),
            a in config_strategy(),
            b in config_strategy()
        ) {
            let twice = apply_filters(&apply_filters(&facilities, &a), &b);
            match a.merge(&b) {
                Some(merged) => prop_assert_eq!(twice, apply_filters(&facilities, &merged)),
                None => prop_assert!(twice.is_empty()),
            }
        }

        #[test]
        fn order_of_application_irrelevant(
            facilities in facilities_strategy(),
            a in config_strategy(),
            b in config_strategy()
        ) {
            let ab = apply_filters(&apply_filters(&facilities, &a), &b);
            let ba = apply_filters(&apply_filters(&facilities, &b), &a);
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn result_is_subsequence_of_input(
            facilities in facilities_strategy(),
            config in config_strategy()
        ) {
            let result = apply_filters(&facilities, &config);
            let mut remaining = facilities.iter();
            for f in &result {
                prop_assert!(remaining.any(|g| g == f));
                prop_assert!(passes(f, &config));
            }
        }
    }
}
