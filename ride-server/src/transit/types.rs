//! Transit API response DTOs.
//!
//! These types map directly to the provider's JSON responses. They use
//! `Option` liberally because the provider omits fields rather than
//! sending null values.

use serde::Deserialize;

use crate::domain::TransportMode;

/// Response from the departures endpoint.
///
/// The `boards` field is absent entirely when the provider has nothing
/// near the search center.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    /// One board per nearby station, nearest first.
    pub boards: Option<Vec<RawBoard>>,
}

/// One station's bundle of upcoming departures.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBoard {
    /// The station this board belongs to.
    pub place: Option<RawPlace>,

    /// Upcoming departures, soonest first.
    #[serde(default)]
    pub departures: Vec<RawDeparture>,
}

/// A station as described by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    /// Human-readable station name.
    pub name: Option<String>,

    /// Station location.
    pub location: Option<RawLocation>,
}

/// A raw coordinate pair.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawLocation {
    pub lat: f64,
    pub lng: f64,
}

/// A single raw departure.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDeparture {
    /// Departure timestamp (ISO-8601-like, usually with a UTC offset).
    pub time: Option<String>,

    /// The vehicle/route serving this departure.
    pub transport: Option<RawTransport>,

    /// Operating agency.
    pub agency: Option<RawAgency>,
}

/// Route/vehicle description for a departure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransport {
    /// Transportation mode (e.g. "bus", "regionalTrain").
    pub mode: Option<TransportMode>,

    /// Short route name.
    pub name: Option<String>,

    /// Rider-facing headsign.
    pub headsign: Option<String>,

    /// Extended route/trip label, sometimes redundant with `name`.
    pub long_name: Option<String>,
}

/// Operating agency for a departure.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAgency {
    pub website: Option<String>,
}

/// Response from the route-computation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesResponse {
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

/// One computed route.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoute {
    /// Route legs in travel order.
    #[serde(default)]
    pub sections: Vec<RawSection>,
}

/// One leg of a computed route.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSection {
    pub arrival: Option<RawRouteEnd>,
}

/// Arrival (or departure) endpoint of a route leg.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRouteEnd {
    pub place: Option<RawRoutePlace>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRoutePlace {
    pub location: Option<RawLocation>,
}

impl RoutesResponse {
    /// The arrival location of the last leg of the first route, if any.
    pub fn final_arrival(&self) -> Option<RawLocation> {
        self.routes
            .first()?
            .sections
            .last()?
            .arrival
            .as_ref()?
            .place
            .as_ref()?
            .location
    }
}
