//! Display-ready departure and station records.

use super::coords::Coordinates;
use super::mode::TransportMode;

/// Sentinel for an agency that published no website.
///
/// Stored explicitly instead of omitting the field, so downstream
/// consumers never have to branch on a missing column.
pub const WEBSITE_NOT_PROVIDED: &str = "not provided";

/// One upcoming departure, fully normalized for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    /// Normalized display time (`YYYY-MM-DD @HH:MM AM|PM`).
    pub time: String,

    /// Transportation mode.
    pub mode: TransportMode,

    /// Short route name (e.g. "61C").
    pub name: String,

    /// Rider-facing headsign describing the trip's direction.
    pub headsign: String,

    /// Resolved long-form display name (see [`resolve_display_name`]).
    pub display_name: String,

    /// Agency website, or [`WEBSITE_NOT_PROVIDED`].
    pub website: String,
}

/// One station and its upcoming departures, in provider order.
///
/// Station identity is positional: the index within one search's result
/// set. It is never a stable external ID and is only meaningful against
/// the snapshot it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct StationBoard {
    /// Human-readable station name.
    pub name: String,

    /// Station location.
    pub coordinates: Coordinates,

    /// Upcoming departures, as returned by the provider (never re-sorted).
    pub departures: Vec<Departure>,
}

/// Pick the most descriptive human-readable label for a departure.
///
/// Providers sometimes set the long name to a redundant copy of the
/// short route name; the headsign is then the more informative label.
pub fn resolve_display_name(name: &str, headsign: &str, long_name: Option<&str>) -> String {
    match long_name {
        None => headsign.to_string(),
        Some(long) if long == name => headsign.to_string(),
        Some(long) => long.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_long_name_yields_headsign() {
        assert_eq!(
            resolve_display_name("something else", "my route", None),
            "my route"
        );
    }

    #[test]
    fn redundant_long_name_yields_headsign() {
        assert_eq!(
            resolve_display_name("something else", "my route", Some("something else")),
            "my route"
        );
    }

    #[test]
    fn informative_long_name_wins() {
        assert_eq!(
            resolve_display_name("something else", "my route", Some("the best choice")),
            "the best choice"
        );
    }
}
