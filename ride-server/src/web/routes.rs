//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tower_http::trace::TraceLayer;

use crate::cache::SearchId;
use crate::destination::DestinationResolver;
use crate::directions::DirectionsError;
use crate::domain::Address;
use crate::history::SearchRecord;
use crate::search::{PipelineError, SearchOutcome, SearchPipeline, SearchSnapshot};
use crate::transit::ConvertError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search", post(search))
        .route(
            "/search/:search_id/stations/:station/directions",
            get(station_directions),
        )
        .route(
            "/search/:search_id/stations/:station/departures/:departure/destination",
            post(departure_destination),
        )
        .route("/history", get(history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Run a station search for an address.
async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    if req.user.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "user must not be empty".to_string(),
        });
    }
    if req.city.trim().is_empty() || req.state.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "city and state are required".to_string(),
        });
    }

    let address = Address::new(req.city, req.state, req.street_address);

    let pipeline = SearchPipeline::new(
        state.geocoder.as_ref(),
        state.transit.as_ref(),
        &state.config,
    );

    let snapshot = match pipeline.run(&req.user, address).await? {
        SearchOutcome::Found(snapshot) => snapshot,
        SearchOutcome::AddressNotRecognized => {
            return Err(AppError::NotFound {
                message: "address not recognized".to_string(),
            });
        }
        SearchOutcome::NoStations => {
            return Err(AppError::NotFound {
                message: "no stations found".to_string(),
            });
        }
    };

    let search_id = state.snapshots.insert(snapshot.clone()).await;

    Ok(Json(SearchResponse::from_snapshot(
        search_id.to_string(),
        &snapshot,
    )))
}

/// Directions from the search's origin to a chosen station.
async fn station_directions(
    State(state): State<AppState>,
    Path((search_id, station)): Path<(u64, usize)>,
    Query(_user): Query<UserQuery>,
) -> Result<Json<DirectionsResult>, AppError> {
    let snapshot = lookup_snapshot(&state, search_id).await?;

    let station = snapshot.station(station).ok_or_else(|| AppError::NotFound {
        message: format!("no station {station} in this search"),
    })?;

    let steps = state
        .directions
        .fetch_directions(
            &snapshot.context.address.search_string(),
            &station.coordinates.as_query(),
        )
        .await?;

    Ok(Json(DirectionsResult { steps }))
}

/// Resolve a departure's destination estimate and persist the selection.
async fn departure_destination(
    State(state): State<AppState>,
    Path((search_id, station, departure)): Path<(u64, usize, usize)>,
    Json(req): Json<DestinationRequest>,
) -> Result<Json<DestinationResult>, AppError> {
    let snapshot = lookup_snapshot(&state, search_id).await?;

    let departure = snapshot
        .departure(station, departure)
        .ok_or_else(|| AppError::NotFound {
            message: format!("no departure {departure} at station {station} in this search"),
        })?;

    let resolver = DestinationResolver::new(state.geocoder.as_ref(), state.transit.as_ref());
    let estimate = resolver.resolve(departure, &snapshot.context).await;

    let record = SearchRecord {
        user: req.user,
        origin_address: snapshot.context.address.search_string(),
        time: departure.time.clone(),
        transportation_mode: departure.mode.as_str().to_string(),
        destination: departure.display_name.clone(),
        website: departure.website.clone(),
        destination_latitude: estimate.coordinates.latitude().to_string(),
        destination_longitude: estimate.coordinates.longitude().to_string(),
        recorded_at: Utc::now(),
    };

    state
        .history
        .record(record)
        .await
        .map_err(|e| AppError::Internal {
            message: e.to_string(),
        })?;

    Ok(Json(DestinationResult::from_estimate(&estimate)))
}

/// The user's recent search records, newest first.
async fn history(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let records = state
        .history
        .recent(&query.user, state.config.history_limit)
        .await
        .map_err(|e| AppError::Internal {
            message: e.to_string(),
        })?;

    Ok(Json(HistoryResponse {
        records: records.iter().map(HistoryRecordResult::from_record).collect(),
    }))
}

/// Dereference a search id against the snapshot store.
async fn lookup_snapshot(state: &AppState, search_id: u64) -> Result<Arc<SearchSnapshot>, AppError> {
    state
        .snapshots
        .get(SearchId(search_id))
        .await
        .ok_or_else(|| AppError::NotFound {
            message: "search expired or unknown, run the search again".to_string(),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        match e {
            // A provider contract violation is this system's defect
            // signal, not the provider being down
            PipelineError::Convert(ConvertError::InvalidTime(_)) => AppError::Internal {
                message: e.to_string(),
            },
            PipelineError::Geocode(_) | PipelineError::Transit(_) => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl From<DirectionsError> for AppError {
    fn from(e: DirectionsError) -> Self {
        match e {
            DirectionsError::NoRoute => AppError::NotFound {
                message: "no directions found".to_string(),
            },
            _ => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
