//! Place-name search.
//!
//! Resolves free text ("Union Square", an address) to a reference point
//! using Nominatim.

mod client;
mod error;

pub use client::{GeocodedPlace, Geocoder, GeocoderConfig, NominatimPlace, parse_search_response};
pub use error::GeocodeError;
