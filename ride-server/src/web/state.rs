//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::SnapshotStore;
use crate::directions::DirectionsProvider;
use crate::geocode::Geocoder;
use crate::history::SearchHistory;
use crate::search::SearchConfig;
use crate::transit::TransitProvider;

/// Shared application state.
///
/// Contains the provider seams and per-process stores needed to handle
/// requests. All per-search state lives in the snapshot store, keyed by
/// search id — never in fields shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// Geocoding provider
    pub geocoder: Arc<dyn Geocoder>,

    /// Transit departures/routing provider
    pub transit: Arc<dyn TransitProvider>,

    /// Directions provider
    pub directions: Arc<dyn DirectionsProvider>,

    /// Retained search result sets
    pub snapshots: Arc<SnapshotStore>,

    /// Search-history persistence collaborator
    pub history: Arc<dyn SearchHistory>,

    /// Search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        transit: Arc<dyn TransitProvider>,
        directions: Arc<dyn DirectionsProvider>,
        history: Arc<dyn SearchHistory>,
        config: SearchConfig,
    ) -> Self {
        Self {
            geocoder,
            transit,
            directions,
            snapshots: Arc::new(SnapshotStore::new(&config)),
            history,
            config: Arc::new(config),
        }
    }
}
