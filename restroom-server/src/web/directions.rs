//! Navigation links.
//!
//! Route planning is delegated to Google Maps; we only build the link.

/// Google Maps directions URL to a destination.
///
/// # Example
///
/// ```ignore
/// let url = directions_url(40.7536, -73.9832);
/// // "https://www.google.com/maps/dir/?api=1&destination=40.7536,-73.9832"
/// ```
pub fn directions_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={latitude},{longitude}")
}
