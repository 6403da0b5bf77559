//! Search-history persistence collaborator.
//!
//! This module owns the shape of the stored records and the seam the
//! persistence layer plugs into; storage mechanics live behind the
//! trait. Writes are append-only — each record is a fresh insert, so
//! concurrent searches from different users never race on updates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// One finalized departure selection, tagged with the owning user and
/// origin. Coordinates are persisted in string form.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRecord {
    /// The user this search belongs to.
    pub user: String,

    /// The origin address as searched.
    pub origin_address: String,

    /// Normalized display time of the departure.
    pub time: String,

    /// Transportation mode string.
    pub transportation_mode: String,

    /// Resolved destination display name.
    pub destination: String,

    /// Agency website, or the "not provided" sentinel.
    pub website: String,

    /// Estimated destination latitude.
    pub destination_latitude: String,

    /// Estimated destination longitude.
    pub destination_longitude: String,

    /// When the record was written.
    pub recorded_at: DateTime<Utc>,
}

/// Error from the history store.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// The backing store could not complete the operation
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

/// The persistence collaborator for finalized searches.
#[async_trait]
pub trait SearchHistory: Send + Sync {
    /// Append one record. Always a fresh insert.
    async fn record(&self, record: SearchRecord) -> Result<(), HistoryError>;

    /// The user's most recent records, newest first, at most `limit`.
    async fn recent(&self, user: &str, limit: usize) -> Result<Vec<SearchRecord>, HistoryError>;
}

/// In-memory append-only history store.
///
/// The default wiring; a database-backed implementation slots in behind
/// the same trait.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    records: RwLock<Vec<SearchRecord>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SearchHistory for InMemoryHistory {
    async fn record(&self, record: SearchRecord) -> Result<(), HistoryError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn recent(&self, user: &str, limit: usize) -> Result<Vec<SearchRecord>, HistoryError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .filter(|r| r.user == user)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: &str, destination: &str) -> SearchRecord {
        SearchRecord {
            user: user.to_string(),
            origin_address: "Culpeper VA".to_string(),
            time: "2021-08-22 @19:52 PM".to_string(),
            transportation_mode: "regionalTrain".to_string(),
            destination: destination.to_string(),
            website: "https://www.amtrak.com".to_string(),
            destination_latitude: "41.8781".to_string(),
            destination_longitude: "-87.6298".to_string(),
            recorded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn records_are_scoped_to_the_user() {
        let history = InMemoryHistory::new();

        history.record(record("kim08", "Chicago")).await.unwrap();
        history.record(record("other", "Boston")).await.unwrap();

        let records = history.recent("kim08", 10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].destination, "Chicago");
    }

    #[tokio::test]
    async fn recent_is_newest_first_and_limited() {
        let history = InMemoryHistory::new();

        for i in 0..5 {
            history
                .record(record("kim08", &format!("stop {i}")))
                .await
                .unwrap();
        }

        let records = history.recent("kim08", 2).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].destination, "stop 4");
        assert_eq!(records[1].destination, "stop 3");
    }

    #[tokio::test]
    async fn unknown_user_has_no_records() {
        let history = InMemoryHistory::new();
        assert!(history.recent("nobody", 10).await.unwrap().is_empty());
    }
}
