//! Geographic coordinates.

use serde::{Deserialize, Serialize};

use super::DomainError;
use crate::geodesy::distance_miles;

/// A latitude/longitude pair in degrees.
///
/// Used as the reference point for distance annotation and urgent ranking.
/// Values built through [`Coordinates::new`] are finite and within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from untrusted input.
    ///
    /// Rejects non-finite values, latitudes outside ±90 and longitudes
    /// outside ±180.
    ///
    /// # Examples
    ///
    /// ```
    /// use restroom_server::domain::Coordinates;
    ///
    /// let nyc = Coordinates::new(40.7128, -74.0060).unwrap();
    /// assert_eq!(nyc.latitude, 40.7128);
    ///
    /// assert!(Coordinates::new(f64::NAN, -74.0).is_err());
    /// assert!(Coordinates::new(40.0, 200.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || latitude.abs() > 90.0 {
            return Err(DomainError::InvalidCoordinate {
                axis: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || longitude.abs() > 180.0 {
            return Err(DomainError::InvalidCoordinate {
                axis: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Great-circle distance to another point, in miles.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance_miles(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let c = Coordinates::new(40.7128, -74.0060).unwrap();
        assert_eq!(c.latitude, 40.7128);
        assert_eq!(c.longitude, -74.0060);
    }

    #[test]
    fn accepts_boundaries() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Coordinates::new(90.5, 0.0),
            Err(DomainError::InvalidCoordinate {
                axis: "latitude",
                value: 90.5
            })
        );
        assert!(Coordinates::new(0.0, -180.1).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn distance_to_matches_free_function() {
        let a = Coordinates::new(40.7128, -74.0060).unwrap();
        let b = Coordinates::new(40.730610, -73.935242).unwrap();
        let d = a.distance_to(&b);
        assert!((d - distance_miles(40.7128, -74.0060, 40.730610, -73.935242)).abs() < 1e-12);
    }
}
