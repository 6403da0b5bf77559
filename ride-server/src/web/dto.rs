//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::destination::DestinationEstimate;
use crate::domain::{Departure, StationBoard};
use crate::history::SearchRecord;
use crate::search::SearchSnapshot;

/// Request to search for nearby stations and departures.
///
/// The `user` field is the authenticated identity supplied by the
/// session collaborator.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub user: String,

    /// City of the origin address
    pub city: String,

    /// State of the origin address
    pub state: String,

    /// Optional street address; without it the search resolves at
    /// city-center granularity
    pub street_address: Option<String>,
}

/// The search origin echoed back to the client.
#[derive(Debug, Serialize)]
pub struct OriginResult {
    /// The address string that was geocoded
    pub address: String,

    pub latitude: f64,
    pub longitude: f64,
}

/// One departure in a search result.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    /// Normalized display time
    pub time: String,

    /// Transportation mode
    pub mode: String,

    /// Short route name
    pub name: String,

    /// Rider-facing headsign
    pub headsign: String,

    /// Resolved long-form display name
    pub display_name: String,

    /// Agency website, or "not provided"
    pub website: String,
}

impl DepartureResult {
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            time: departure.time.clone(),
            mode: departure.mode.as_str().to_string(),
            name: departure.name.clone(),
            headsign: departure.headsign.clone(),
            display_name: departure.display_name.clone(),
            website: departure.website.clone(),
        }
    }
}

/// One station in a search result.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Positional identity within this search's result set
    pub index: usize,

    /// Station name
    pub name: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Upcoming departures in provider order
    pub departures: Vec<DepartureResult>,
}

impl StationResult {
    pub fn from_station(index: usize, station: &StationBoard) -> Self {
        Self {
            index,
            name: station.name.clone(),
            latitude: station.coordinates.latitude(),
            longitude: station.coordinates.longitude(),
            departures: station
                .departures
                .iter()
                .map(DepartureResult::from_departure)
                .collect(),
        }
    }
}

/// Response for a successful search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Handle for later station/departure selection against this
    /// result set
    pub search_id: String,

    pub origin: OriginResult,

    pub stations: Vec<StationResult>,
}

impl SearchResponse {
    pub fn from_snapshot(search_id: String, snapshot: &SearchSnapshot) -> Self {
        Self {
            search_id,
            origin: OriginResult {
                address: snapshot.context.address.search_string(),
                latitude: snapshot.context.coordinates.latitude(),
                longitude: snapshot.context.coordinates.longitude(),
            },
            stations: snapshot
                .stations
                .iter()
                .enumerate()
                .map(|(index, station)| StationResult::from_station(index, station))
                .collect(),
        }
    }
}

/// Query string carrying the session collaborator's user identity.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user: String,
}

/// Response for a directions request.
#[derive(Debug, Serialize)]
pub struct DirectionsResult {
    /// Plain-text instruction steps in order
    pub steps: Vec<String>,
}

/// Request to resolve a departure's destination estimate.
#[derive(Debug, Deserialize)]
pub struct DestinationRequest {
    pub user: String,
}

/// Response for a destination estimate.
#[derive(Debug, Serialize)]
pub struct DestinationResult {
    pub latitude: f64,
    pub longitude: f64,

    /// How the estimate was derived: "route_endpoint", "heuristic",
    /// or "origin"
    pub source: String,
}

impl DestinationResult {
    pub fn from_estimate(estimate: &DestinationEstimate) -> Self {
        Self {
            latitude: estimate.coordinates.latitude(),
            longitude: estimate.coordinates.longitude(),
            source: estimate.source.as_str().to_string(),
        }
    }
}

/// One persisted search-history record.
#[derive(Debug, Serialize)]
pub struct HistoryRecordResult {
    pub origin_address: String,
    pub time: String,
    pub transportation_mode: String,
    pub destination: String,
    pub website: String,
    pub destination_latitude: String,
    pub destination_longitude: String,
    pub recorded_at: String,
}

impl HistoryRecordResult {
    pub fn from_record(record: &SearchRecord) -> Self {
        Self {
            origin_address: record.origin_address.clone(),
            time: record.time.clone(),
            transportation_mode: record.transportation_mode.clone(),
            destination: record.destination.clone(),
            website: record.website.clone(),
            destination_latitude: record.destination_latitude.clone(),
            destination_longitude: record.destination_longitude.clone(),
            recorded_at: record.recorded_at.to_rfc3339(),
        }
    }
}

/// Response for a history request.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub records: Vec<HistoryRecordResult>,
}

/// Error payload for all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
