//! Cambio API Server
//!
//! Main entry point for the currency conversion service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cambio_api::{AppState, create_router};
use cambio_core::{ConversionError, Converter, RateTable};
use cambio_shared::{AppConfig, RatesConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; production emits one JSON object per event
    let json = json_logs(std::env::var("RUN_MODE").ok().as_deref());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cambio_server=debug,cambio_api=debug,tower_http=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Load the rate table once; it is never mutated afterwards
    let rates = load_rates(&config.rates).context("Failed to load exchange rates")?;
    info!(
        currencies = rates.len(),
        source = config.rates.path.as_deref().unwrap_or("embedded"),
        "Exchange rates loaded"
    );

    // Create application state
    let state = AppState {
        converter: Converter::new(Arc::new(rates)),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn load_rates(config: &RatesConfig) -> Result<RateTable, ConversionError> {
    match &config.path {
        Some(path) => RateTable::from_json_file(path),
        None => RateTable::embedded(),
    }
}

fn json_logs(run_mode: Option<&str>) -> bool {
    run_mode == Some("production")
}
