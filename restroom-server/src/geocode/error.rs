//! Geocoder error types.

/// Errors that can occur when resolving a place name.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// User agent could not be used as a header value
    #[error("invalid user agent")]
    InvalidUserAgent,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The geocoder returned coordinates we cannot use
    #[error("invalid coordinates in geocoder response: {lat}, {lon}")]
    InvalidCoordinates { lat: String, lon: String },
}
