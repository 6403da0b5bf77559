//! Destination coordinate estimation for a chosen departure.
//!
//! Preferred source is the provider's own route computation: geocode a
//! full address built from the departure's long-form name and the
//! origin's city/state, route from the origin to that point, and take
//! the final arrival location. When any step of that misses, a
//! mode-dependent geocoding heuristic takes over, and in the worst case
//! the estimate degrades to the origin's own coordinates. This
//! operation never fails.

use tracing::{debug, warn};

use crate::domain::{Coordinates, Departure};
use crate::geocode::Geocoder;
use crate::search::SearchContext;
use crate::transit::TransitProvider;

/// Latitude drift beyond which a heuristic geocode for local transit is
/// taken as evidence the geocoder attached to the wrong place. Exactly
/// this much drift is still accepted.
pub const MAX_PLAUSIBLE_LAT_DRIFT_DEG: f64 = 1.5;

/// How a destination estimate was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateSource {
    /// Arrival location of a provider-computed route (authoritative).
    RouteEndpoint,

    /// Geocoded from the destination's place name (approximate).
    Heuristic,

    /// No better estimate was available; these are the origin's own
    /// coordinates.
    Origin,
}

impl EstimateSource {
    /// Stable string form for responses and persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RouteEndpoint => "route_endpoint",
            Self::Heuristic => "heuristic",
            Self::Origin => "origin",
        }
    }
}

/// Destination coordinates for one departure, tagged with provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestinationEstimate {
    pub coordinates: Coordinates,
    pub source: EstimateSource,
}

/// Resolves destination coordinates for a chosen departure.
pub struct DestinationResolver<'a> {
    geocoder: &'a dyn Geocoder,
    transit: &'a dyn TransitProvider,
}

impl<'a> DestinationResolver<'a> {
    pub fn new(geocoder: &'a dyn Geocoder, transit: &'a dyn TransitProvider) -> Self {
        Self { geocoder, transit }
    }

    /// Resolve an estimate for `departure` relative to the search origin.
    ///
    /// Always yields a coordinate pair; provider misses and failures
    /// degrade through the fallback tiers instead of propagating.
    pub async fn resolve(
        &self,
        departure: &Departure,
        context: &SearchContext,
    ) -> DestinationEstimate {
        if let Some(coordinates) = self.from_route_endpoint(departure, context).await {
            debug!(destination = %departure.display_name, "destination from route endpoint");
            return DestinationEstimate {
                coordinates,
                source: EstimateSource::RouteEndpoint,
            };
        }

        self.fallback(departure, context).await
    }

    /// Primary tier: geocode the long-form name anchored to the origin's
    /// city/state, then take the final arrival of a computed route.
    async fn from_route_endpoint(
        &self,
        departure: &Departure,
        context: &SearchContext,
    ) -> Option<Coordinates> {
        let query = format!(
            "{} {} {}",
            departure.display_name, context.address.city, context.address.state
        );

        let destination = self.geocode_quietly(&query).await?;

        match self
            .transit
            .route_arrival(context.coordinates, destination)
            .await
        {
            Ok(arrival) => arrival,
            Err(e) => {
                warn!(error = %e, "route computation failed, falling back");
                None
            }
        }
    }

    /// Fallback tier, split by transportation mode.
    ///
    /// Local-transit stop names rarely geocode well standalone, so they
    /// are anchored to the origin address and sanity-checked against the
    /// origin's latitude. Regional/intercity names are usually
    /// unambiguous on their own.
    async fn fallback(&self, departure: &Departure, context: &SearchContext) -> DestinationEstimate {
        if departure.mode.is_local() {
            let query = format!(
                "{}, {}",
                departure.display_name,
                context.address.search_string()
            );

            if let Some(estimate) = self.geocode_quietly(&query).await {
                let drift = (estimate.latitude() - context.coordinates.latitude()).abs();
                if drift <= MAX_PLAUSIBLE_LAT_DRIFT_DEG {
                    return DestinationEstimate {
                        coordinates: estimate,
                        source: EstimateSource::Heuristic,
                    };
                }
                warn!(
                    destination = %departure.display_name,
                    drift,
                    "heuristic geocode drifted implausibly far, using origin"
                );
            }
        } else if let Some(estimate) = self.geocode_quietly(&departure.display_name).await {
            return DestinationEstimate {
                coordinates: estimate,
                source: EstimateSource::Heuristic,
            };
        }

        DestinationEstimate {
            coordinates: context.coordinates,
            source: EstimateSource::Origin,
        }
    }

    /// Geocode where both "no match" and a failed call mean `None`.
    async fn geocode_quietly(&self, query: &str) -> Option<Coordinates> {
        match self.geocoder.resolve(query).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, %query, "geocode failed during destination resolution");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    use crate::domain::{Address, TransportMode};
    use crate::geocode::GeocodeError;
    use crate::transit::{RawBoard, TransitError};

    /// Geocoder stub answering from a fixed query → coordinates table.
    struct TableGeocoder {
        answers: HashMap<String, Coordinates>,
    }

    impl TableGeocoder {
        fn new(entries: &[(&str, Coordinates)]) -> Self {
            Self {
                answers: entries
                    .iter()
                    .map(|(q, c)| (q.to_string(), *c))
                    .collect(),
            }
        }

        fn empty() -> Self {
            Self {
                answers: HashMap::new(),
            }
        }
    }

    #[async_trait]
    impl Geocoder for TableGeocoder {
        async fn resolve(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
            Ok(self.answers.get(query).copied())
        }
    }

    /// Transit stub with a fixed route-arrival answer.
    struct FixedRoutes(Option<Coordinates>);

    #[async_trait]
    impl TransitProvider for FixedRoutes {
        async fn fetch_boards(
            &self,
            _center: Coordinates,
        ) -> Result<Option<Vec<RawBoard>>, TransitError> {
            Ok(None)
        }

        async fn route_arrival(
            &self,
            _origin: Coordinates,
            _destination: Coordinates,
        ) -> Result<Option<Coordinates>, TransitError> {
            Ok(self.0)
        }
    }

    fn origin() -> Coordinates {
        Coordinates::new(40.4406, -79.9959).unwrap()
    }

    fn context() -> SearchContext {
        SearchContext {
            user: "kim08".to_string(),
            address: Address::new("Pittsburgh", "PA", None),
            coordinates: origin(),
        }
    }

    fn departure(mode: TransportMode, display_name: &str) -> Departure {
        Departure {
            time: "2021-08-23 @05:35 AM".to_string(),
            mode,
            name: "61C".to_string(),
            headsign: display_name.to_string(),
            display_name: display_name.to_string(),
            website: "not provided".to_string(),
        }
    }

    #[tokio::test]
    async fn route_endpoint_wins_when_available() {
        let geocoded = Coordinates::new(40.5, -80.1).unwrap();
        let arrival = Coordinates::new(41.8781, -87.6298).unwrap();

        let geocoder = TableGeocoder::new(&[("Chicago Union Station Pittsburgh PA", geocoded)]);
        let transit = FixedRoutes(Some(arrival));
        let resolver = DestinationResolver::new(&geocoder, &transit);

        let estimate = resolver
            .resolve(
                &departure(TransportMode::RegionalTrain, "Chicago Union Station"),
                &context(),
            )
            .await;

        assert_eq!(estimate.coordinates, arrival);
        assert_eq!(estimate.source, EstimateSource::RouteEndpoint);
    }

    #[tokio::test]
    async fn bus_fallback_keeps_nearby_estimate() {
        let nearby = Coordinates::new(40.6, -80.0).unwrap();

        let geocoder = TableGeocoder::new(&[("Downtown, Pittsburgh PA", nearby)]);
        let transit = FixedRoutes(None);
        let resolver = DestinationResolver::new(&geocoder, &transit);

        let estimate = resolver
            .resolve(&departure(TransportMode::Bus, "Downtown"), &context())
            .await;

        assert_eq!(estimate.coordinates, nearby);
        assert_eq!(estimate.source, EstimateSource::Heuristic);
    }

    #[tokio::test]
    async fn bus_fallback_discards_implausible_estimate() {
        // 40.4406 + 1.6 degrees: too far for local transit
        let far_away = Coordinates::new(42.0406, -80.0).unwrap();

        let geocoder = TableGeocoder::new(&[("Downtown, Pittsburgh PA", far_away)]);
        let transit = FixedRoutes(None);
        let resolver = DestinationResolver::new(&geocoder, &transit);

        let estimate = resolver
            .resolve(&departure(TransportMode::Bus, "Downtown"), &context())
            .await;

        assert_eq!(estimate.coordinates, origin());
        assert_eq!(estimate.source, EstimateSource::Origin);
    }

    #[tokio::test]
    async fn drift_of_exactly_the_bound_is_accepted() {
        // 40.4406 + exactly 1.5 degrees: "not greater than" keeps it
        let boundary = Coordinates::new(40.4406 + 1.5, -80.0).unwrap();

        let geocoder = TableGeocoder::new(&[("Downtown, Pittsburgh PA", boundary)]);
        let transit = FixedRoutes(None);
        let resolver = DestinationResolver::new(&geocoder, &transit);

        let estimate = resolver
            .resolve(&departure(TransportMode::Bus, "Downtown"), &context())
            .await;

        assert_eq!(estimate.coordinates, boundary);
        assert_eq!(estimate.source, EstimateSource::Heuristic);
    }

    #[tokio::test]
    async fn train_fallback_geocodes_name_alone() {
        let chicago = Coordinates::new(41.8781, -87.6298).unwrap();

        // Only the bare place name resolves; the primary tier's
        // city/state-anchored query misses.
        let geocoder = TableGeocoder::new(&[("Chicago Union Station", chicago)]);
        let transit = FixedRoutes(None);
        let resolver = DestinationResolver::new(&geocoder, &transit);

        let estimate = resolver
            .resolve(
                &departure(TransportMode::RegionalTrain, "Chicago Union Station"),
                &context(),
            )
            .await;

        assert_eq!(estimate.coordinates, chicago);
        assert_eq!(estimate.source, EstimateSource::Heuristic);
    }

    #[tokio::test]
    async fn train_fallback_degrades_to_origin() {
        let geocoder = TableGeocoder::empty();
        let transit = FixedRoutes(None);
        let resolver = DestinationResolver::new(&geocoder, &transit);

        let estimate = resolver
            .resolve(
                &departure(TransportMode::RegionalTrain, "Nowhere Junction"),
                &context(),
            )
            .await;

        assert_eq!(estimate.coordinates, origin());
        assert_eq!(estimate.source, EstimateSource::Origin);
    }

    #[tokio::test]
    async fn geocoder_failure_degrades_to_origin() {
        struct FailingGeocoder;

        #[async_trait]
        impl Geocoder for FailingGeocoder {
            async fn resolve(&self, _query: &str) -> Result<Option<Coordinates>, GeocodeError> {
                Err(GeocodeError::Unauthorized)
            }
        }

        let transit = FixedRoutes(None);
        let resolver = DestinationResolver::new(&FailingGeocoder, &transit);

        let estimate = resolver
            .resolve(&departure(TransportMode::Bus, "Downtown"), &context())
            .await;

        assert_eq!(estimate.coordinates, origin());
        assert_eq!(estimate.source, EstimateSource::Origin);
    }
}
