//! Transit HTTP client.
//!
//! Async client for the HERE Transit v8 departures and routing
//! endpoints. The departures search center is a coordinate pair; the
//! provider applies its own fixed search radius (nominally 500 m),
//! which this system does not configure.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::Coordinates;

use super::error::TransitError;
use super::types::{DeparturesResponse, RawBoard, RoutesResponse};

/// Default base URL for the departures API.
const DEFAULT_BASE_URL: &str = "https://transit.hereapi.com/v8";

/// Default base URL for the route-computation API.
const DEFAULT_ROUTER_BASE_URL: &str = "https://transit.router.hereapi.com/v8";

/// Configuration for the transit client.
#[derive(Debug, Clone)]
pub struct TransitConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the departures API (overridable for testing)
    pub base_url: String,
    /// Base URL for the routing API (overridable for testing)
    pub router_base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TransitConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            router_base_url: DEFAULT_ROUTER_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom departures base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom routing base URL (for testing).
    pub fn with_router_base_url(mut self, url: impl Into<String>) -> Self {
        self.router_base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// The transit-departures and route-computation provider.
#[async_trait]
pub trait TransitProvider: Send + Sync {
    /// Fetch raw departure boards near `center`.
    ///
    /// Returns `Ok(None)` when the provider response omits the boards
    /// field — callers treat this identically to "no stations found".
    async fn fetch_boards(&self, center: Coordinates) -> Result<Option<Vec<RawBoard>>, TransitError>;

    /// The arrival location of the last leg of the first route from
    /// `origin` to `destination`, or `None` when no route comes back.
    async fn route_arrival(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<Option<Coordinates>, TransitError>;
}

/// HERE Transit API client.
#[derive(Debug, Clone)]
pub struct HereTransitClient {
    http: reqwest::Client,
    base_url: String,
    router_base_url: String,
    api_key: String,
}

impl HereTransitClient {
    /// Create a new transit client with the given configuration.
    pub fn new(config: TransitConfig) -> Result<Self, TransitError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            router_base_url: config.router_base_url,
            api_key: config.api_key,
        })
    }

    async fn check_status(response: reqwest::Response) -> Result<String, TransitError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TransitError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransitError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl TransitProvider for HereTransitClient {
    async fn fetch_boards(&self, center: Coordinates) -> Result<Option<Vec<RawBoard>>, TransitError> {
        let url = format!("{}/departures", self.base_url);

        debug!(center = %center, "fetching departure boards");

        let center = center.as_query();
        let response = self
            .http
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str()), ("in", center.as_str())])
            .send()
            .await?;

        let body = Self::check_status(response).await?;

        // A body missing the boards field, or one that does not parse at
        // all, is a provider contract wobble handled as "no stations
        // found" — the pipeline must not crash on it.
        let parsed: DeparturesResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "transit provider returned malformed boards response, treating as empty"
                );
                return Ok(None);
            }
        };

        Ok(parsed.boards)
    }

    async fn route_arrival(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<Option<Coordinates>, TransitError> {
        let url = format!("{}/routes", self.router_base_url);

        debug!(origin = %origin, destination = %destination, "computing route arrival");

        let origin = origin.as_query();
        let destination = destination.as_query();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
            ])
            .send()
            .await?;

        let body = Self::check_status(response).await?;

        let parsed: RoutesResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "transit provider returned malformed routes response, treating as no route"
                );
                return Ok(None);
            }
        };

        let Some(location) = parsed.final_arrival() else {
            return Ok(None);
        };

        match Coordinates::new(location.lat, location.lng) {
            Ok(coordinates) => Ok(Some(coordinates)),
            Err(e) => {
                warn!(error = %e, "route arrival had invalid coordinates, discarding");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TransitConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.router_base_url, DEFAULT_ROUTER_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn config_builder() {
        let config = TransitConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_router_base_url("http://localhost:8081")
            .with_timeout(30);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.router_base_url, "http://localhost:8081");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let config = TransitConfig::new("test-key");
        assert!(HereTransitClient::new(config).is_ok());
    }
}
