//! Search configuration.

use std::time::Duration;

/// Configuration parameters for the search flow.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of stations kept per search.
    pub max_stations: usize,

    /// How long a search snapshot stays addressable for station
    /// selection before it expires.
    pub snapshot_ttl: Duration,

    /// Maximum number of retained snapshots.
    pub snapshot_capacity: u64,

    /// Maximum number of history records returned per user.
    pub history_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_stations: 5,
            snapshot_ttl: Duration::from_secs(15 * 60),
            snapshot_capacity: 1000,
            history_limit: 30,
        }
    }
}
