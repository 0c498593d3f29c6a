//! Domain types for the restroom locator.
//!
//! This module contains the core domain model types. Types that accept
//! untrusted input enforce their invariants at construction time.

mod category;
mod coords;
mod error;
mod facility;

pub use category::{FacilityType, TypeFilter};
pub use coords::Coordinates;
pub use error::DomainError;
pub use facility::{Facility, FacilityId};
