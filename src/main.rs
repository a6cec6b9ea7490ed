use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use wandermate::api::AppState;
use wandermate::{
    CurrencyClient, GeocodingClient, SampleInventory, TipsClient, TripPlanner, WanderMateConfig,
    web,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional config file path as the single CLI argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = WanderMateConfig::load_from_path(config_path)
        .with_context(|| "Failed to load configuration")?;

    init_tracing(&config);

    tracing::info!("Starting WanderMate v{}", wandermate::VERSION);

    let planner = TripPlanner::new(
        Arc::new(GeocodingClient::new(config.geocoding.clone())?),
        Arc::new(CurrencyClient::new(config.currency.clone())?),
        Arc::new(TipsClient::new(config.tips.clone())?),
        Arc::new(SampleInventory::new()),
    );

    let state = AppState {
        planner: Arc::new(planner),
    };

    web::run(state, config.server.port).await?;
    Ok(())
}

fn init_tracing(config: &WanderMateConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
