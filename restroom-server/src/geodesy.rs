//! Great-circle distance.

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance between two points given in degrees, in miles.
///
/// Symmetric in its arguments and zero for identical points. Inputs must be
/// finite; records reach this function only after normalization has
/// rejected invalid coordinates.
///
/// # Examples
///
/// ```
/// use restroom_server::geodesy::distance_miles;
///
/// let d = distance_miles(40.7128, -74.0060, 40.730610, -73.935242);
/// assert!((d - 3.9).abs() < 0.1);
/// ```
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
