//! Request-scoped search state.

use crate::domain::{Address, Coordinates, Departure, StationBoard};

/// The origin of one search: the user, the address they typed, and the
/// coordinates it resolved to.
///
/// Travels explicitly through the pipeline. Concurrent searches from
/// different users each carry their own context.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// The authenticated user this search belongs to.
    pub user: String,

    /// The address as supplied.
    pub address: Address,

    /// Coordinates from the most recent geocode of `address`.
    pub coordinates: Coordinates,
}

/// The immutable result set of one search.
///
/// Station indices are only meaningful against the snapshot captured at
/// search time. Later index-based selection dereferences this snapshot,
/// never a fresh re-fetch whose stations could have reordered.
#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    /// The search's origin context.
    pub context: SearchContext,

    /// Stations in provider order; index is station identity.
    pub stations: Vec<StationBoard>,
}

impl SearchSnapshot {
    /// Look up a station by its index in this result set.
    pub fn station(&self, index: usize) -> Option<&StationBoard> {
        self.stations.get(index)
    }

    /// Look up a departure by station and departure index.
    pub fn departure(&self, station: usize, departure: usize) -> Option<&Departure> {
        self.station(station)?.departures.get(departure)
    }
}
