use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ride_server::directions::{DirectionsConfig, MapsDirectionsClient};
use ride_server::geocode::{GeocoderConfig, HereGeocoder};
use ride_server::history::InMemoryHistory;
use ride_server::search::SearchConfig;
use ride_server::transit::{HereTransitClient, TransitConfig};
use ride_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ride_server=info,tower_http=info")),
        )
        .init();

    // Get credentials from environment
    let here_key = std::env::var("HERE_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: HERE_API_KEY not set. Geocode and transit calls will fail.");
        String::new()
    });
    let directions_key = std::env::var("DIRECTIONS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: DIRECTIONS_API_KEY not set. Directions calls will fail.");
        String::new()
    });

    // Create provider clients
    let geocoder =
        HereGeocoder::new(GeocoderConfig::new(&here_key)).expect("Failed to create geocoder");
    let transit = HereTransitClient::new(TransitConfig::new(&here_key))
        .expect("Failed to create transit client");
    let directions = MapsDirectionsClient::new(DirectionsConfig::new(&directions_key))
        .expect("Failed to create directions client");

    // Build app state
    let state = AppState::new(
        Arc::new(geocoder),
        Arc::new(transit),
        Arc::new(directions),
        Arc::new(InMemoryHistory::new()),
        SearchConfig::default(),
    );

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("RIDE_SERVER_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("Ride Finder listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                                     - Health check");
    println!("  POST /search                                     - Find stations near an address");
    println!("  GET  /search/:id/stations/:n/directions          - Directions to a station");
    println!("  POST /search/:id/stations/:n/departures/:m/destination - Destination estimate");
    println!("  GET  /history                                    - Recent searches for a user");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
