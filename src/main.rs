use hargapangan::config::Config;
use hargapangan::infrastructure::{artifacts, dataset::PriceTable, geo};
use hargapangan::interfaces::ui::DashboardApp;

use anyhow::Context;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // Load env before anything reads it.
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Initializing Harga Pangan dashboard...");

    let config = Config::from_env()?;

    // Everything the dashboard renders is loaded up front; a broken artifact
    // stops the process here instead of surfacing mid-session.
    let service = artifacts::load_forecast_service(&config.model_path, &config.encoders_path)?;
    let table = PriceTable::from_csv(&config.dataset_path)
        .with_context(|| format!("Failed to load price table at {:?}", config.dataset_path))?;
    let atlas = geo::load_province_atlas(&config.geojson_path)?;

    let app = DashboardApp::new(service, table, atlas);

    info!("Artifacts loaded. Launching UI.");

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Harga Pangan"),
        ..Default::default()
    };

    eframe::run_native(
        "Harga Pangan",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
