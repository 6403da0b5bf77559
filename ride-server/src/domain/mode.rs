//! Transportation modes as reported by the departures provider.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Transportation mode of a departure.
///
/// The provider's well-known local-transit modes are enumerated; every
/// other mode string is passed through verbatim rather than rejected,
/// since the provider's mode vocabulary grows over time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Bus,
    Subway,
    RegionalTrain,
    LightRail,
    Ferry,
    Other(String),
}

impl TransportMode {
    /// Parse a provider mode string.
    pub fn parse(s: &str) -> Self {
        match s {
            "bus" => Self::Bus,
            "subway" => Self::Subway,
            "regionalTrain" => Self::RegionalTrain,
            "lightRail" => Self::LightRail,
            "ferry" => Self::Ferry,
            other => Self::Other(other.to_string()),
        }
    }

    /// The provider's string form of this mode.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bus => "bus",
            Self::Subway => "subway",
            Self::RegionalTrain => "regionalTrain",
            Self::LightRail => "lightRail",
            Self::Ferry => "ferry",
            Self::Other(s) => s,
        }
    }

    /// Surface/local transit, where the provider's stop names rarely
    /// geocode well on their own.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Bus | Self::Subway | Self::Ferry | Self::LightRail)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
