//! Shaping raw departure boards into display-ready records.
//!
//! Boards and departures keep provider order throughout; a station's
//! identity is its index in the returned vector, valid only for the
//! lifetime of one search result set.

use tracing::warn;

use crate::domain::{
    Coordinates, Departure, StationBoard, TimeParseError, WEBSITE_NOT_PROVIDED,
    format_display_time, resolve_display_name,
};

use super::types::{RawBoard, RawDeparture};

/// Error during board conversion.
///
/// Only a timestamp the provider should never emit reaches here; a
/// board or departure with missing fields is skipped quietly instead,
/// since missing keys are handled as absent data rather than faults.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConvertError {
    /// A departure carried an unparseable timestamp
    #[error("invalid departure time: {0}")]
    InvalidTime(#[from] TimeParseError),
}

/// Shape raw provider boards into ordered station boards.
///
/// Returns `Ok(None)` when the input is structurally absent,
/// propagating the "no data" outcome from the fetch step. At most
/// `max_stations` boards are kept, in provider order.
pub fn aggregate(
    raw: Option<Vec<RawBoard>>,
    max_stations: usize,
) -> Result<Option<Vec<StationBoard>>, ConvertError> {
    let Some(boards) = raw else {
        return Ok(None);
    };

    let mut stations = Vec::with_capacity(boards.len().min(max_stations));
    for board in boards {
        if stations.len() == max_stations {
            break;
        }
        if let Some(station) = convert_board(board)? {
            stations.push(station);
        }
    }

    Ok(Some(stations))
}

/// Convert one board, or `None` when it lacks a usable station.
fn convert_board(board: RawBoard) -> Result<Option<StationBoard>, ConvertError> {
    let Some(place) = board.place else {
        warn!("skipping board without place");
        return Ok(None);
    };
    let Some(name) = place.name else {
        warn!("skipping board without station name");
        return Ok(None);
    };
    let Some(location) = place.location else {
        warn!(station = %name, "skipping board without station location");
        return Ok(None);
    };
    let coordinates = match Coordinates::new(location.lat, location.lng) {
        Ok(coordinates) => coordinates,
        Err(e) => {
            warn!(station = %name, error = %e, "skipping board with invalid location");
            return Ok(None);
        }
    };

    let mut departures = Vec::with_capacity(board.departures.len());
    for raw in board.departures {
        if let Some(departure) = convert_departure(raw)? {
            departures.push(departure);
        }
    }

    Ok(Some(StationBoard {
        name,
        coordinates,
        departures,
    }))
}

/// Convert one departure, or `None` when required fields are missing.
///
/// A present-but-unparseable timestamp is the one loud failure: it
/// means the provider changed its format, which is worth surfacing.
fn convert_departure(raw: RawDeparture) -> Result<Option<Departure>, ConvertError> {
    let Some(time) = raw.time else {
        warn!("skipping departure without time");
        return Ok(None);
    };
    let Some(transport) = raw.transport else {
        warn!("skipping departure without transport");
        return Ok(None);
    };
    let Some(mode) = transport.mode else {
        warn!("skipping departure without mode");
        return Ok(None);
    };

    let time = format_display_time(&time)?;
    let name = transport.name.unwrap_or_default();
    let headsign = transport.headsign.unwrap_or_default();
    let display_name = resolve_display_name(&name, &headsign, transport.long_name.as_deref());
    let website = raw
        .agency
        .and_then(|agency| agency.website)
        .unwrap_or_else(|| WEBSITE_NOT_PROVIDED.to_string());

    Ok(Some(Departure {
        time,
        mode,
        name,
        headsign,
        display_name,
        website,
    }))
}
