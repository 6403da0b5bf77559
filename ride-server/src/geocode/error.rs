//! Geocoder client error types.

/// Errors from the geocoding HTTP client.
///
/// "No match for this address" is not an error; it is the `Ok(None)`
/// outcome of [`super::Geocoder::resolve`].
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check HERE_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Provider returned coordinates outside the valid range
    #[error("invalid provider coordinates: {message}")]
    InvalidCoordinates { message: String },
}
