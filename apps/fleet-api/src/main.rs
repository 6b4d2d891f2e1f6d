//! FleetLink API - Vehicle registry service
//!
//! HTTP service exposing CRUD, attribute search and aggregation over an
//! in-memory vehicle collection, optionally seeded from a JSON file.

mod config;
mod dto;
mod handlers;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use fleetlink_domain::{
    ports::VehicleLoader,
    vehicle::{ServiceConfig, VehicleService},
};
use fleetlink_memory::{InMemoryVehicleRepository, JsonFileLoader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub vehicle_service: Arc<VehicleService<InMemoryVehicleRepository>>,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Initialize tracing
    init_tracing(config.log_format);

    info!("Starting FleetLink vehicle service");

    // Seed the repository from the bootstrap file, if any
    let repository = match &config.data_path {
        Some(path) => {
            let loader = JsonFileLoader::new(path);
            info!(path = %loader.path().display(), "Loading initial vehicles");
            let vehicles = loader.load().await.with_context(|| {
                format!("failed to load vehicles from {}", loader.path().display())
            })?;
            InMemoryVehicleRepository::with_vehicles(vehicles)
        }
        None => {
            info!("FLEET_DATA_PATH not set, starting with an empty collection");
            InMemoryVehicleRepository::new()
        }
    };

    // Create vehicle service
    let service = VehicleService::new(
        repository,
        ServiceConfig {
            max_speed_kmh: config.max_speed_kmh,
        },
    );
    info!(
        max_speed_kmh = service.config().max_speed_kmh,
        "Vehicle service ready"
    );

    // Create shared application state
    let state = AppState {
        vehicle_service: Arc::new(service),
    };

    // Build HTTP router
    let app = routes::create_router(state);

    let addr = config.bind_address();
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
