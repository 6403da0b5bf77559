//! Transit client error types.

/// Errors from the transit-departures HTTP client.
///
/// "No boards for this location" is not an error; it is the `Ok(None)`
/// outcome of [`super::TransitProvider::fetch_boards`].
#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check HERE_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by transit API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Mock data could not be loaded
    #[error("mock data error: {message}")]
    MockData { message: String },
}
