//! Locating restrooms: distance annotation, filtering and urgent ranking.
//!
//! Everything here is a pure function over slices of [`Facility`]. Inputs
//! are never modified, so results may be recomputed freely whenever the
//! data, reference point or filters change.
//!
//! [`Facility`]: crate::domain::Facility

mod annotate;
mod config;
mod display;
mod filter;
mod urgent;

#[cfg(test)]
mod fixtures;

pub use annotate::annotate_distances;
pub use config::{DisplayRequest, FilterConfig};
pub use display::display_list;
pub use filter::{apply_filters, passes};
pub use urgent::{urgent_order, urgent_sort};
