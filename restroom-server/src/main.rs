use std::error::Error;

use restroom_server::cache::{CachedGeocoder, FacilityStore};
use restroom_server::config::ServerConfig;
use restroom_server::geocode::Geocoder;
use restroom_server::opendata::{FacilityLoader, FallbackDataset, OpenDataClient};
use restroom_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    if config.open_data.app_token.is_none() && !config.fallback_only {
        tracing::warn!("NYC_OPEN_DATA_APP_TOKEN not set; requests will be rate limited");
    }

    let fallback = match &config.fallback_path {
        Some(path) => FallbackDataset::from_path(path)?,
        None => FallbackDataset::bundled()?,
    };
    tracing::info!(records = fallback.len(), "Loaded fallback dataset");

    let client = OpenDataClient::new(config.open_data.clone())?;
    let loader = FacilityLoader::new(client, fallback).fallback_only(config.fallback_only);
    let facilities = FacilityStore::new(loader, &config.cache);

    // Warm the cache so the first request doesn't wait on Open Data
    let initial = facilities.current().await;
    tracing::info!(
        count = initial.facilities.len(),
        origin = ?initial.origin,
        "Loaded facilities"
    );

    let geocoder = CachedGeocoder::new(Geocoder::new(config.geocoder.clone())?, &config.cache);

    let state = AppState::new(facilities, geocoder);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("NYC Restroom Finder listening on http://{}", config.bind_addr);
    tracing::info!("  GET /api/facilities  - List facilities");
    tracing::info!("  GET /api/geocode     - Resolve a place name");
    tracing::info!("  GET /health          - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
