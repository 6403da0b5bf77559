//! Directions client error types.

/// Errors from the directions HTTP client.
///
/// Unlike the destination resolver, an empty result here propagates:
/// directions are a best-effort convenience, and their absence should
/// surface rather than silently degrade to an empty list.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check DIRECTIONS_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Provider returned zero routes
    #[error("no route between origin and destination")]
    NoRoute,
}
