//! Urgent-mode ranking.
//!
//! Urgent mode shows only open facilities, accessible ones first, then by
//! proximity. It replaces the regular filters rather than combining with
//! them.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::domain::{Coordinates, Facility};

/// Rank facilities for urgent mode.
///
/// Without a reference point, or with no facilities, the input is returned
/// as-is. Otherwise closed facilities are removed and the rest are stably
/// sorted by [`urgent_order`].
pub fn urgent_sort<'a>(
    facilities: &'a [Facility],
    reference: Option<&Coordinates>,
) -> Cow<'a, [Facility]> {
    if reference.is_none() || facilities.is_empty() {
        return Cow::Borrowed(facilities);
    }

    let mut open: Vec<Facility> = facilities.iter().filter(|f| f.is_open).cloned().collect();
    open.sort_by(urgent_order);
    Cow::Owned(open)
}

/// Accessible before non-accessible, then ascending distance.
///
/// A facility without a distance compares as if it were at distance zero,
/// which puts it ahead of measured facilities with the same accessibility.
/// Callers annotate distances before ranking, so this only matters for
/// facilities that bypassed annotation.
pub fn urgent_order(a: &Facility, b: &Facility) -> Ordering {
    b.is_accessible
        .cmp(&a.is_accessible)
        .then_with(|| a.distance.unwrap_or(0.0).total_cmp(&b.distance.unwrap_or(0.0)))
}
