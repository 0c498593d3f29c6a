//! NYC Open Data error types.

/// Errors that can occur when loading restroom datasets.
#[derive(Debug, thiserror::Error)]
pub enum OpenDataError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// App token could not be used as a header value
    #[error("invalid app token format")]
    InvalidToken,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Fallback dataset could not be read or parsed
    #[error("fallback dataset error: {message}")]
    Fallback { message: String },
}
