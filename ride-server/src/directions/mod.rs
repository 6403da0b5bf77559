//! Directions provider integration.
//!
//! Retrieves turn-by-turn instructions for one origin→station trip and
//! strips the provider's embedded markup, leaving plain text.

mod client;
mod error;
mod types;

pub use client::{DirectionsConfig, DirectionsProvider, MapsDirectionsClient};
pub use error::DirectionsError;
pub use types::DirectionsResponse;
