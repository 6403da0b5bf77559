//! Geocoder API response DTOs.
//!
//! The provider nests the useful payload five levels deep and omits
//! levels entirely when there is no match, so every layer is optional
//! or defaulted.

use serde::Deserialize;

/// Top-level geocoder response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(rename = "Response")]
    pub response: Option<ResponseBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "View", default)]
    pub view: Vec<View>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct View {
    #[serde(rename = "Result", default)]
    pub result: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(rename = "Location")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    #[serde(rename = "NavigationPosition", default)]
    pub navigation_position: Vec<NavigationPosition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigationPosition {
    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl GeocodeResponse {
    /// The first result's navigation position, if the response has one.
    pub fn first_position(&self) -> Option<(f64, f64)> {
        let position = self
            .response
            .as_ref()?
            .view
            .first()?
            .result
            .first()?
            .location
            .as_ref()?
            .navigation_position
            .first()?;
        Some((position.latitude, position.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_response() {
        let json = r#"{
            "Response": {
                "View": [
                    {
                        "Result": [
                            {
                                "Location": {
                                    "NavigationPosition": [
                                        {"Latitude": 38.4733, "Longitude": -77.9961}
                                    ]
                                }
                            }
                        ]
                    }
                ]
            }
        }"#;

        let parsed: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_position(), Some((38.4733, -77.9961)));
    }

    #[test]
    fn empty_view_has_no_position() {
        let json = r#"{"Response": {"View": []}}"#;
        let parsed: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_position(), None);
    }

    #[test]
    fn missing_response_has_no_position() {
        let parsed: GeocodeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.first_position(), None);
    }

    #[test]
    fn missing_navigation_position_has_no_position() {
        let json = r#"{
            "Response": {
                "View": [{"Result": [{"Location": {"NavigationPosition": []}}]}]
            }
        }"#;
        let parsed: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_position(), None);
    }
}
