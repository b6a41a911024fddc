use std::path::PathBuf;

mod map;
mod plugins;
mod state;
mod widgets;
mod windows;
use map::MapApp;

/// Settings the interface needs from the command line.
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub data_path: PathBuf,
    pub title: String,
}

/// Opens the map window and blocks until it is closed.
pub fn run(config: MapConfig) -> Result<(), eframe::Error> {
    let title = config.title.clone();
    eframe::run_native(
        &title,
        Default::default(),
        Box::new(move |cc| Ok(Box::new(MapApp::new(cc.egui_ctx.clone(), config)))),
    )
}
