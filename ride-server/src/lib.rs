//! Transit station and departure finder.
//!
//! A web service that answers: "what public transit can I catch near
//! this address, and where does it go?"

pub mod cache;
pub mod destination;
pub mod directions;
pub mod domain;
pub mod geocode;
pub mod history;
pub mod search;
pub mod transit;
pub mod web;
