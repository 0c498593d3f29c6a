//! The display pipeline: annotate, then filter or rank.

use std::cmp::Ordering;

use crate::domain::Facility;

use super::annotate::annotate_distances;
use super::config::DisplayRequest;
use super::filter::apply_filters;
use super::urgent::urgent_sort;

/// Compute the ordered list to display for a request.
///
/// Distances are attached when a reference point is known. Urgent mode then
/// ranks with [`urgent_sort`] and ignores the filters. Regular mode applies
/// the filters and, with a reference point, orders by ascending distance.
pub fn display_list(facilities: &[Facility], request: &DisplayRequest) -> Vec<Facility> {
    let reference = request.reference.as_ref();
    let annotated = annotate_distances(facilities, reference);

    if request.urgent {
        return urgent_sort(&annotated, reference).into_owned();
    }

    let mut filtered = apply_filters(&annotated, &request.filters);
    if reference.is_some() {
        filtered.sort_by(nearest_first);
    }
    filtered
}

/// Ascending distance; facilities without one go last.
fn nearest_first(a: &Facility, b: &Facility) -> Ordering {
    match (a.distance, b.distance) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
