//! Geocoding HTTP client.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::Coordinates;

use super::error::GeocodeError;
use super::types::GeocodeResponse;

/// Default base URL for the HERE Geocoder API.
const DEFAULT_BASE_URL: &str = "https://geocoder.ls.hereapi.com/6.2";

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (overridable for testing)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 5,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Resolves free-text addresses to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve an address to coordinates.
    ///
    /// Returns `Ok(None)` when the provider has no match — the expected
    /// outcome for garbage input, which terminates the search flow with
    /// an "address not recognized" result rather than an error. Never
    /// retries.
    async fn resolve(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError>;
}

/// HERE Geocoder API client.
#[derive(Debug, Clone)]
pub struct HereGeocoder {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HereGeocoder {
    /// Create a new geocoding client with the given configuration.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl Geocoder for HereGeocoder {
    async fn resolve(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/geocode.json", self.base_url);

        debug!(%query, "geocoding address");

        let response = self
            .http
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str()), ("searchtext", query.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodeError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        // A malformed or empty body counts as "no match", same as an
        // empty result set. It must not crash the search flow.
        let parsed: GeocodeResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "geocoder returned malformed response, treating as no match"
                );
                return Ok(None);
            }
        };

        let Some((lat, lng)) = parsed.first_position() else {
            debug!(%query, "geocoder found no match");
            return Ok(None);
        };

        let coordinates =
            Coordinates::new(lat, lng).map_err(|e| GeocodeError::InvalidCoordinates {
                message: e.to_string(),
            })?;

        debug!(%query, %coordinates, "geocoded address");
        Ok(Some(coordinates))
    }
}

/// Collapse runs of whitespace into single spaces. The provider treats
/// the query itself case-insensitively.
fn normalize_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}
