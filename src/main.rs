//! chunkbar — segmented download progress bar demo.
//!
//! Thin binary entry point. All logic lives in the `chunkbar-core`
//! and `chunkbar-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("chunkbar starting");

    // Optional demo configuration next to the executable; defaults apply
    // when the file does not exist.
    let config_path = std::path::Path::new("chunkbar.json");
    let config = chunkbar_core::config::DemoConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("chunkbar -- Segmented Download Progress")
            .with_inner_size([560.0, 340.0])
            .with_min_inner_size([400.0, 260.0]),
        ..Default::default()
    };

    eframe::run_native(
        "chunkbar",
        options,
        Box::new(|cc| Ok(Box::new(chunkbar_gui::ChunkbarApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
