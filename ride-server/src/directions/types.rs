//! Directions API response DTOs.

use serde::Deserialize;

/// Top-level directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

/// One suggested route.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoute {
    #[serde(default)]
    pub legs: Vec<RawLeg>,
}

/// One leg of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLeg {
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

/// One instruction step. The instruction text carries embedded HTML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStep {
    pub html_instructions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_directions_response() {
        let json = r#"{
            "routes": [
                {
                    "legs": [
                        {
                            "steps": [
                                {"html_instructions": "Turn <b>right</b> on Davis St."},
                                {"html_instructions": "Continue straight"}
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let parsed: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.routes.len(), 1);
        assert_eq!(parsed.routes[0].legs[0].steps.len(), 2);
        assert_eq!(
            parsed.routes[0].legs[0].steps[0].html_instructions.as_deref(),
            Some("Turn <b>right</b> on Davis St.")
        );
    }

    #[test]
    fn deserialize_empty_routes() {
        let parsed: DirectionsResponse = serde_json::from_str(r#"{"routes": []}"#).unwrap();
        assert!(parsed.routes.is_empty());

        let parsed: DirectionsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.routes.is_empty());
    }
}
