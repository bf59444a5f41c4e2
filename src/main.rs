use line_grapher::app::LineGrapherApp;
use line_grapher::config::{GraphConfig, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    line_grapher::logging::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = match GraphConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err:#}; using the default config");
            GraphConfig::default()
        }
    };
    tracing::info!(path = %config_path.display(), ?config, "starting");

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(860.0, 620.0)),
        min_window_size: Some(egui::vec2(520.0, 400.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Line Grapher",
        native_options,
        Box::new(move |cc| Box::new(LineGrapherApp::new(cc, config))),
    )
}
