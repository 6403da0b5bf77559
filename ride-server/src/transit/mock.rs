//! Mock transit client for testing without API access.
//!
//! Serves canned departure-board and route responses from JSON files,
//! as if they were live API responses.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::Coordinates;

use super::client::TransitProvider;
use super::error::TransitError;
use super::types::{DeparturesResponse, RawBoard, RoutesResponse};

/// Mock transit client backed by static JSON fixtures.
///
/// Useful for development and testing without real API credentials.
/// The search center is ignored — mock data is static.
#[derive(Debug, Clone)]
pub struct MockTransitClient {
    boards: Option<Vec<RawBoard>>,
    routes: Option<RoutesResponse>,
}

impl MockTransitClient {
    /// Load fixtures from a directory.
    ///
    /// Expects `departures.json` (a departures response) and optionally
    /// `routes.json` (a routes response for arrival lookups).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, TransitError> {
        let data_dir = data_dir.as_ref();

        let departures_path = data_dir.join("departures.json");
        let json = std::fs::read_to_string(&departures_path).map_err(|e| TransitError::MockData {
            message: format!("failed to read {:?}: {}", departures_path, e),
        })?;
        let departures: DeparturesResponse =
            serde_json::from_str(&json).map_err(|e| TransitError::MockData {
                message: format!("failed to parse {:?}: {}", departures_path, e),
            })?;

        let routes_path = data_dir.join("routes.json");
        let routes = if routes_path.is_file() {
            let json = std::fs::read_to_string(&routes_path).map_err(|e| TransitError::MockData {
                message: format!("failed to read {:?}: {}", routes_path, e),
            })?;
            Some(
                serde_json::from_str(&json).map_err(|e| TransitError::MockData {
                    message: format!("failed to parse {:?}: {}", routes_path, e),
                })?,
            )
        } else {
            None
        };

        Ok(Self {
            boards: departures.boards,
            routes,
        })
    }

    /// Build a mock directly from an in-memory departures response.
    pub fn from_response(departures: DeparturesResponse) -> Self {
        Self {
            boards: departures.boards,
            routes: None,
        }
    }

    /// Attach a canned routes response for arrival lookups.
    pub fn with_routes(mut self, routes: RoutesResponse) -> Self {
        self.routes = Some(routes);
        self
    }
}

#[async_trait]
impl TransitProvider for MockTransitClient {
    async fn fetch_boards(
        &self,
        _center: Coordinates,
    ) -> Result<Option<Vec<RawBoard>>, TransitError> {
        Ok(self.boards.clone())
    }

    async fn route_arrival(
        &self,
        _origin: Coordinates,
        _destination: Coordinates,
    ) -> Result<Option<Coordinates>, TransitError> {
        let Some(routes) = &self.routes else {
            return Ok(None);
        };
        let Some(location) = routes.final_arrival() else {
            return Ok(None);
        };
        Ok(Coordinates::new(location.lat, location.lng).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPARTURES_FIXTURE: &str = r#"{
        "boards": [
            {
                "place": {
                    "name": "Culpeper Amtrak",
                    "location": {"lat": 38.4722, "lng": -77.9935}
                },
                "departures": [
                    {
                        "time": "2021-08-22T19:52:00-04:00",
                        "transport": {
                            "mode": "regionalTrain",
                            "name": "Crescent",
                            "headsign": "New Orleans"
                        },
                        "agency": {"website": "https://www.amtrak.com"}
                    }
                ]
            }
        ]
    }"#;

    const ROUTES_FIXTURE: &str = r#"{
        "routes": [
            {
                "sections": [
                    {"arrival": {"place": {"location": {"lat": 41.8781, "lng": -87.6298}}}}
                ]
            }
        ]
    }"#;

    fn center() -> Coordinates {
        Coordinates::new(38.4733, -77.9961).unwrap()
    }

    #[tokio::test]
    async fn load_mock_data_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("departures.json"), DEPARTURES_FIXTURE).unwrap();
        std::fs::write(dir.path().join("routes.json"), ROUTES_FIXTURE).unwrap();

        let client = MockTransitClient::new(dir.path()).unwrap();

        let boards = client.fetch_boards(center()).await.unwrap().unwrap();
        assert_eq!(boards.len(), 1);

        let arrival = client
            .route_arrival(center(), center())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(arrival.latitude(), 41.8781);
    }

    #[tokio::test]
    async fn routes_fixture_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("departures.json"), DEPARTURES_FIXTURE).unwrap();

        let client = MockTransitClient::new(dir.path()).unwrap();
        assert!(client
            .route_arrival(center(), center())
            .await
            .unwrap()
            .is_none());
    }

    #[test]
    fn missing_departures_fixture_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MockTransitClient::new(dir.path()).is_err());
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("departures.json"), "not json").unwrap();
        assert!(MockTransitClient::new(dir.path()).is_err());
    }
}
