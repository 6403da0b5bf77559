//! Transit-departures provider integration.
//!
//! Fetches raw per-station departure boards around a coordinate pair
//! and shapes them into ordered, display-ready records. Also exposes
//! the provider's route-computation endpoint for destination lookup.

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{HereTransitClient, TransitConfig, TransitProvider};
pub use convert::{ConvertError, aggregate};
pub use error::TransitError;
pub use types::{
    DeparturesResponse, RawAgency, RawBoard, RawDeparture, RawLocation, RawPlace, RawTransport,
    RoutesResponse,
};
