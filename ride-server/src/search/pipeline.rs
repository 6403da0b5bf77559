//! The search pipeline: address → coordinates → departure boards.

use tracing::debug;

use crate::domain::Address;
use crate::geocode::{GeocodeError, Geocoder};
use crate::transit::{ConvertError, TransitError, TransitProvider, aggregate};

use super::config::SearchConfig;
use super::context::{SearchContext, SearchSnapshot};

/// Terminal outcome of one search request.
///
/// The two "not found" variants are expected results, not failures;
/// callers branch on them to show "try again" messaging while the rest
/// of the session stays usable.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Stations were found; the snapshot carries the full result set.
    Found(SearchSnapshot),

    /// The geocoder had no match for the address.
    AddressNotRecognized,

    /// The address resolved, but no departure boards came back.
    NoStations,
}

/// Error from a pipeline stage that could not produce an outcome.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The geocoding call itself failed (network, auth)
    #[error("geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),

    /// The departures call itself failed (network, auth)
    #[error("departure fetch failed: {0}")]
    Transit(#[from] TransitError),

    /// The provider sent data this system cannot shape
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Runs one search end to end against the provider seams.
pub struct SearchPipeline<'a> {
    geocoder: &'a dyn Geocoder,
    transit: &'a dyn TransitProvider,
    config: &'a SearchConfig,
}

impl<'a> SearchPipeline<'a> {
    pub fn new(
        geocoder: &'a dyn Geocoder,
        transit: &'a dyn TransitProvider,
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            geocoder,
            transit,
            config,
        }
    }

    /// Run the full pipeline for one user's address.
    ///
    /// Each stage is a single blocking provider call; nothing here
    /// retries. A transient provider failure surfaces as an error for
    /// this request only.
    pub async fn run(&self, user: &str, address: Address) -> Result<SearchOutcome, PipelineError> {
        let Some(coordinates) = self.geocoder.resolve(&address.search_string()).await? else {
            debug!(address = %address, "address not recognized");
            return Ok(SearchOutcome::AddressNotRecognized);
        };

        let raw = self.transit.fetch_boards(coordinates).await?;

        let Some(stations) = aggregate(raw, self.config.max_stations)? else {
            debug!(address = %address, "no departure boards near address");
            return Ok(SearchOutcome::NoStations);
        };

        if stations.is_empty() {
            debug!(address = %address, "boards present but no usable stations");
            return Ok(SearchOutcome::NoStations);
        }

        debug!(address = %address, stations = stations.len(), "search complete");

        Ok(SearchOutcome::Found(SearchSnapshot {
            context: SearchContext {
                user: user.to_string(),
                address,
                coordinates,
            },
            stations,
        }))
    }
}
