//! Venue Analytics - Main Entry Point
//!
//! Headless driver: loads the API configuration, runs one load cycle, and
//! logs the option sets and computed totals. A presentation layer would
//! read the same state this prints.

use venue_analytics::constants::API_CONFIG_FILE;
use venue_analytics::services::{ApiConfig, HttpApiClient};
use venue_analytics::states::DashboardState;
use venue_analytics::utils::config_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting venue analytics client...");

    let config: ApiConfig = config_store::load_config(API_CONFIG_FILE)?;
    let client = HttpApiClient::new(config)?;
    let mut dashboard = DashboardState::new(client);

    dashboard.load_data().await;

    if dashboard.is_offline() {
        tracing::error!("Offline: {}", dashboard.load_error().unwrap_or_default());
        return Ok(());
    }
    if let Some(error) = dashboard.load_error() {
        tracing::warn!("Load finished with errors:\n{}", error);
    }

    tracing::info!(
        "Loaded {} buildings, {} devices, {} purchase rows",
        dashboard.buildings().len(),
        dashboard.devices().len(),
        dashboard.flattened_purchases().len()
    );
    tracing::info!("Manufacturers: {:?}", dashboard.manufacturer_options());
    tracing::info!("Countries: {:?}", dashboard.country_options());
    tracing::info!("States: {:?}", dashboard.state_options());
    tracing::info!("Categories: {:?}", dashboard.category_options());
    tracing::info!("Items: {:?}", dashboard.item_options());

    tracing::info!(
        "Manufacturer {:?} total: {}",
        dashboard.selected_manufacturer,
        dashboard.manufacturer_total()
    );
    tracing::info!(
        "Category {:?} total: {}",
        dashboard.selected_category_id,
        dashboard.category_total()
    );
    tracing::info!(
        "Country {:?} total: {}",
        dashboard.selected_country,
        dashboard.country_total()
    );
    tracing::info!(
        "State {:?} total: {}",
        dashboard.selected_state,
        dashboard.state_total()
    );
    tracing::info!(
        "Item {:?} purchase count: {}",
        dashboard.selected_item_id,
        dashboard.item_purchase_count()
    );
    tracing::info!("Top building: {}", dashboard.top_building_name());

    Ok(())
}
