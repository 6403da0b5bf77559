//! Geographic coordinate types.

use std::fmt;

/// Error returned when constructing invalid coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A validated (latitude, longitude) pair in decimal degrees.
///
/// A `Coordinates` value is finite and in range by construction. A pair
/// is always fully present; there is no half-populated state.
///
/// # Examples
///
/// ```
/// use ride_server::domain::Coordinates;
///
/// let pittsburgh = Coordinates::new(40.4406, -79.9959).unwrap();
/// assert_eq!(pittsburgh.latitude(), 40.4406);
///
/// // Non-finite values are rejected
/// assert!(Coordinates::new(f64::NAN, 0.0).is_err());
/// assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Construct a coordinate pair, validating both components.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinates {
                reason: "components must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within -90..=90",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within -180..=180",
            });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.lng
    }

    /// The `"lat,lng"` form the providers accept as a query value.
    pub fn as_query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range finite pair constructs successfully.
        #[test]
        fn in_range_always_valid(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let c = Coordinates::new(lat, lng).unwrap();
            prop_assert_eq!(c.latitude(), lat);
            prop_assert_eq!(c.longitude(), lng);
        }

        /// Out-of-range latitude is always rejected.
        #[test]
        fn out_of_range_lat_rejected(lat in 90.0f64..1e6, lng in -180.0f64..=180.0) {
            prop_assume!(lat > 90.0);
            prop_assert!(Coordinates::new(lat, lng).is_err());
        }
    }
}
