//! User-supplied search addresses.

use std::fmt;

/// The origin address for a station search.
///
/// City and state are always present; the street address is optional.
/// Without a street address the search resolves at city-center
/// granularity, which the geocoding provider handles fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub street_address: Option<String>,
}

impl Address {
    /// Build an address, trimming surrounding whitespace. An empty or
    /// blank street address is treated as absent.
    pub fn new(city: impl Into<String>, state: impl Into<String>, street_address: Option<String>) -> Self {
        let street_address = street_address
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            city: city.into().trim().to_string(),
            state: state.into().trim().to_string(),
            street_address,
        }
    }

    /// The geocoding query string: `"<street> <city> <state>"`, with the
    /// street omitted when absent and interior whitespace collapsed.
    pub fn search_string(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(street) = &self.street_address {
            parts.extend(street.split_whitespace());
        }
        parts.extend(self.city.split_whitespace());
        parts.extend(self.state.split_whitespace());
        parts.join(" ")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.search_string())
    }
}
