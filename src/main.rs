//! Caro desktop client
//!
//! Play five-in-a-row against the bot or another player. Settings are read
//! from `caro.toml` in the working directory when present.

use std::path::Path;

use caro::config::AppConfig;
use caro::ui::CaroApp;

const CONFIG_PATH: &str = "caro.toml";

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_PATH)).unwrap_or_else(|e| {
        log::error!("{}; using default settings", e);
        AppConfig::default()
    });
    log::info!(
        "starting {}x{} board, difficulty {}, human plays {}",
        config.board_size,
        config.board_size,
        config.difficulty,
        config.human_mark
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Caro"),
        ..Default::default()
    };

    eframe::run_native(
        "Caro",
        options,
        Box::new(move |cc| Ok(Box::new(CaroApp::new(cc, config)))),
    )
}
