//! Itsajoke - main entry point

use anyhow::{anyhow, Result};
use eframe::egui;
use itsajoke::ui::JokeApp;
use itsajoke::{JokeConfig, JokeFetcher, JokeWorker};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itsajoke=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting itsajoke");

    let config = JokeConfig::from_env();
    config.validate().map_err(|e| anyhow!(e))?;
    if config.api_key().is_none() {
        // Not fatal: the burst still plays and the modal explains the problem
        warn!("No API key in {}; jokes will fail", config.api_key_var);
    }

    let worker = JokeWorker::new(JokeFetcher::http(config))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([300.0, 400.0])
            .with_title("it's a joke"),
        ..Default::default()
    };

    eframe::run_native(
        "itsajoke",
        options,
        Box::new(move |cc| Ok(Box::new(JokeApp::new(cc, worker)))),
    )
    .map_err(|e| anyhow!("eframe error: {e}"))
}
