//! Othello GUI
//!
//! Play Othello as Black against a greedy AI.

use anyhow::{Context, Result};
use clap::Parser;
use othello::cli::Cli;
use othello::ui::OthelloApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config().context("Failed to load configuration")?;
    info!(?config, "Starting Othello");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {}", e))
}
