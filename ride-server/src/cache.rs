//! Search snapshot retention.
//!
//! Station identity is positional within one search's result set, so a
//! later index-based selection must dereference the station set captured
//! at search time — never a fresh re-fetch whose stations could have
//! reordered. Each completed search is stored under a generated id;
//! TTL expiry bounds how long a selection stays valid and surfaces as a
//! not-found outcome rather than silently serving different stations.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use moka::future::Cache as MokaCache;

use crate::search::{SearchConfig, SearchSnapshot};

/// Identifier of one retained search result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchId(pub u64);

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// TTL-bounded store of completed search snapshots.
pub struct SnapshotStore {
    snapshots: MokaCache<u64, Arc<SearchSnapshot>>,
    next_id: AtomicU64,
}

impl SnapshotStore {
    /// Create a new store with the given configuration.
    pub fn new(config: &SearchConfig) -> Self {
        let snapshots = MokaCache::builder()
            .time_to_live(config.snapshot_ttl)
            .max_capacity(config.snapshot_capacity)
            .build();

        Self {
            snapshots,
            next_id: AtomicU64::new(0),
        }
    }

    /// Retain a snapshot, returning its id.
    pub async fn insert(&self, snapshot: SearchSnapshot) -> SearchId {
        let id = SearchId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.snapshots.insert(id.0, Arc::new(snapshot)).await;
        id
    }

    /// Look up a retained snapshot. `None` once expired or evicted.
    pub async fn get(&self, id: SearchId) -> Option<Arc<SearchSnapshot>> {
        self.snapshots.get(&id.0).await
    }

    /// Number of retained snapshots (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.snapshots.entry_count()
    }
}
