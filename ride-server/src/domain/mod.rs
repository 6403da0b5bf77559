//! Core value types for the search pipeline.

mod address;
mod coords;
mod departure;
mod mode;
mod time;

pub use address::Address;
pub use coords::{Coordinates, InvalidCoordinates};
pub use departure::{Departure, StationBoard, WEBSITE_NOT_PROVIDED, resolve_display_name};
pub use mode::TransportMode;
pub use time::{TimeParseError, format_display_time};
