//! Directions HTTP client.

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions";

/// Markup the provider embeds in instruction text.
const MARKUP_PATTERN: &str = r"<b>|</b>|<div[^>]*>|</div>|<wbr/>";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (overridable for testing)
    pub base_url: String,
    /// Travel mode requested from the provider
    pub mode: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            mode: "walking".to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the travel mode (e.g. "walking", "driving").
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Retrieves turn-by-turn directions between two addresses.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Plain-text instruction steps for the first route's first leg.
    ///
    /// Propagates [`DirectionsError::NoRoute`] when the provider
    /// returns zero routes; there is no fallback here.
    async fn fetch_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<String>, DirectionsError>;
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct MapsDirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    mode: String,
    markup: Regex,
}

impl MapsDirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let markup = Regex::new(MARKUP_PATTERN).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
        })?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            mode: config.mode,
            markup,
        })
    }

    /// Strip the provider's embedded markup from an instruction.
    fn strip_markup(&self, instruction: &str) -> String {
        self.markup.replace_all(instruction, "").into_owned()
    }
}

#[async_trait]
impl DirectionsProvider for MapsDirectionsClient {
    async fn fetch_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<String>, DirectionsError> {
        let url = format!("{}/json", self.base_url);

        debug!(%origin, %destination, "fetching directions");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", self.mode.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectionsError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
            })?;

        let route = parsed.routes.first().ok_or(DirectionsError::NoRoute)?;
        let leg = route.legs.first().ok_or(DirectionsError::NoRoute)?;

        let steps = leg
            .steps
            .iter()
            .filter_map(|step| step.html_instructions.as_deref())
            .map(|instruction| self.strip_markup(instruction))
            .collect();

        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MapsDirectionsClient {
        MapsDirectionsClient::new(DirectionsConfig::new("test-key")).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.mode, "walking");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn config_builder() {
        let config = DirectionsConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_mode("driving")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.mode, "driving");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn strips_bold_tags() {
        assert_eq!(
            client().strip_markup("Turn <b>right</b> on Davis St."),
            "Turn right on Davis St."
        );
    }

    #[test]
    fn strips_divs_with_and_without_attributes() {
        assert_eq!(
            client().strip_markup(r#"Walk north<div style="font-size:0.9em">Destination ahead</div>"#),
            "Walk northDestination ahead"
        );
        assert_eq!(client().strip_markup("<div>inner</div>"), "inner");
    }

    #[test]
    fn strips_word_breaks() {
        assert_eq!(
            client().strip_markup("Penn<wbr/>sylvania Ave"),
            "Pennsylvania Ave"
        );
    }

    #[test]
    fn stripped_output_has_no_angle_brackets() {
        let stripped = client().strip_markup(
            r#"Head <b>south</b> on <b>Grant St</b><div style="x">toward Fifth Ave</div><wbr/>"#,
        );
        assert!(!stripped.contains('<'));
        assert!(!stripped.contains('>'));
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(
            client().strip_markup("Continue straight for 0.3 mi"),
            "Continue straight for 0.3 mi"
        );
    }
}
