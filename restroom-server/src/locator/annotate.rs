//! Distance annotation.

use std::borrow::Cow;

use crate::domain::{Coordinates, Facility};

/// Attach the distance from `reference` to every facility.
///
/// Without a reference point the input is handed back as-is and no
/// facility gains a distance. The input is never modified.
pub fn annotate_distances<'a>(
    facilities: &'a [Facility],
    reference: Option<&Coordinates>,
) -> Cow<'a, [Facility]> {
    match reference {
        None => Cow::Borrowed(facilities),
        Some(reference) => Cow::Owned(
            facilities
                .iter()
                .map(|f| f.with_distance_from(reference))
                .collect(),
        ),
    }
}
