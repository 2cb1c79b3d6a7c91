//! Geocoding error types.

/// Errors that can occur while resolving a location query.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoder asked us to slow down
    #[error("rate limited by geocoder")]
    RateLimited,

    /// Geocoder returned an error status
    #[error("geocoder error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client could not be built from its configuration
    #[error("invalid geocoder configuration: {0}")]
    Config(String),
}
