//! Geocoder adapter.
//!
//! Resolves a free-text address to coordinates via the HERE Geocoder
//! API. A provider with no match is an expected outcome (`Ok(None)`),
//! not an error.

mod client;
mod error;
mod types;

pub use client::{Geocoder, GeocoderConfig, HereGeocoder};
pub use error::GeocodeError;
