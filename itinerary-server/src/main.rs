use std::process::ExitCode;

use itinerary_server::config::{ConfigError, ServerConfig};
use itinerary_server::geocode::{CachedResolver, GeocodeError, NominatimClient, StaticResolver};
use itinerary_server::web::{AppState, create_router};
use tracing::{error, info};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "itinerary_server=info,tower_http=info";

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create geocoder: {0}")]
    Geocoder(#[from] GeocodeError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let geocoder = config.geocoder.clone();

    // Build app state around the configured resolver
    let state = if geocoder.offline {
        info!("geocoder offline, searching built-in landmarks");
        AppState::new(StaticResolver::landmarks(), geocoder, config.map)
    } else {
        let client = NominatimClient::new(geocoder.nominatim())?;
        info!(base_url = %geocoder.base_url, "using nominatim geocoder");
        let cached = CachedResolver::new(client, &geocoder.cache());
        AppState::new(cached, geocoder, config.map)
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Itinerary server listening on http://{}", config.bind_addr);
    info!("  GET  /health                   - Health check");
    info!("  POST /api/itinerary/route      - Markers, segments and viewport");
    info!("  POST /api/itinerary/edit       - Apply one edit");
    info!("  POST /api/itinerary/validate   - Check save-readiness");
    info!("  GET  /api/locations/search     - Search places");
    info!("  POST /api/locations/click      - Resolve a map click");

    axum::serve(listener, app).await?;
    Ok(())
}
