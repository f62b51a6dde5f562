//! Portfolio Studio - desktop portfolio builder
//!
//! A Rust-based portfolio editor with form and JSON editing, live preview in
//! two layout variants, and self-contained static export.

mod app;
mod core;
mod render;
mod ui;

use app::PortfolioApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Portfolio Studio...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Portfolio Studio"),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio Studio",
        native_options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc)))),
    )
}
