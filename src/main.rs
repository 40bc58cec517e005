use anyhow::{bail, Context, Result};

use skycast_core::Config;
use skycast_identity::{IdentityClient, ProfileStore};
use skycast_server::AppState;
use skycast_weather::{Units, WeatherClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    // Initialize core (tracing)
    skycast_core::init()?;

    let config = Config::from_env()?;
    let validation = config.validate();
    for warning in &validation.warnings {
        tracing::warn!("Config warning: {warning}");
    }
    if !validation.is_valid() {
        bail!("Invalid configuration: {}", validation.error_summary());
    }

    let units = Units::from_name(&config.weather.units).unwrap_or_default();

    let identity = IdentityClient::new(&config.identity.auth_url, &config.identity.api_key)
        .context("Failed to create identity client")?;
    let profiles = ProfileStore::new(&config.identity.database_url)
        .context("Failed to create profile store")?;
    let weather = WeatherClient::new(&config.weather.base_url, &config.weather.api_key, units)
        .context("Failed to create weather client")?;

    tracing::info!("Skycast server starting");

    skycast_server::run(
        AppState::new(identity, profiles, weather),
        &config.server.host,
        config.server.port,
    )
    .await
    .context("Server error")?;

    Ok(())
}
