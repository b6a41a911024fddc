use std::{cell::RefCell, rc::Rc};

use egui::{Color32, Context, RichText};
use egui_extras::install_image_loaders;
use locations::{AppState, Effect, LoadState, Message, Viewport};
use tracing::{debug, warn};
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use crate::{
    plugins,
    state::Loader,
    widgets::{View, WidgetOverlay, WidgetSidebar},
    windows, MapConfig,
};

const INITIAL_LAT: f64 = 35.6762;
const INITIAL_LON: f64 = 139.6503;
const INITIAL_ZOOM: f64 = 10.0;
const SIDEBAR_WIDTH: f32 = 380.0;

pub fn to_map_position(position: locations::Position) -> Position {
    Position::from_lat_lon(position.lat, position.lng)
}

/// The main application struct: the map with one marker per visible
/// location and the sidebar with filters and cards.
///
/// Widgets and markers only emit [`Message`]s. Once a frame is drawn they
/// are fed to [`AppState::update`] and the resulting effects are applied to
/// the map and the sidebar.
pub struct MapApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    load_state: LoadState,
    loader: Loader,
    sidebar: WidgetSidebar,
    viewport_applied: bool,
}

impl MapApp {
    /// Creates the window state and starts loading the locations.
    pub fn new(egui_ctx: Context, config: MapConfig) -> Self {
        install_image_loaders(&egui_ctx);
        let mut initial_map_memory = MapMemory::default();
        if let Err(e) = initial_map_memory.set_zoom(INITIAL_ZOOM) {
            warn!(error = ?e, "could not set the initial zoom");
        }

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            load_state: LoadState::Loading,
            loader: Loader::spawn(config.data_path, egui_ctx),
            sidebar: WidgetSidebar::default(),
            viewport_applied: false,
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.loader.poll(&mut self.load_state);

        let state = match &mut self.load_state {
            LoadState::Loading => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading locations...");
                        });
                    });
                });
                return;
            }
            LoadState::Failed(message) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new(format!("Could not load locations: {message}"))
                                .color(Color32::RED)
                                .size(18.0),
                        );
                    });
                });
                return;
            }
            LoadState::Ready(state) => state,
        };

        if !self.viewport_applied {
            if let Some(viewport) = state.initial_viewport() {
                apply_viewport(&mut self.map_memory, viewport);
            }
            self.viewport_applied = true;
        }

        let mut messages = Vec::new();

        egui::SidePanel::left("locations_sidebar")
            .resizable(true)
            .default_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                self.sidebar.ui(ui, state, &mut messages);
            });

        let marker_clicks = Rc::new(RefCell::new(Vec::new()));

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let my_position = Position::from_lat_lon(INITIAL_LAT, INITIAL_LON);
                let tiles = self.tiles.as_mut();
                let markers = state.markers();

                let marker_plugin =
                    plugins::Markers::new(&markers, state.overlay(), marker_clicks.clone());

                let map = Map::new(Some(tiles), &mut self.map_memory, my_position)
                    .with_plugin(marker_plugin);

                ui.add(map);

                windows::zoom(ui, &mut self.map_memory);
            });

        if let Some(view) = state.overlay_view() {
            if !WidgetOverlay::new(&view).show(ctx) {
                messages.push(Message::OverlayClosed);
            }
        }

        messages.extend(marker_clicks.borrow_mut().drain(..));
        dispatch(state, messages, &mut self.map_memory, &mut self.sidebar);
    }
}

fn dispatch(
    state: &mut AppState,
    messages: Vec<Message>,
    map_memory: &mut MapMemory,
    sidebar: &mut WidgetSidebar,
) {
    for message in messages {
        for effect in state.update(message) {
            debug!(?effect, "applying effect");
            match effect {
                Effect::FocusOn { position, zoom } => {
                    map_memory.center_at(to_map_position(position));
                    if let Some(zoom) = zoom {
                        if let Err(e) = map_memory.set_zoom(zoom) {
                            warn!(error = ?e, zoom, "could not zoom on location");
                        }
                    }
                }
                Effect::ScrollToCard(id) => sidebar.scroll_to(id),
            }
        }
    }
}

fn apply_viewport(map_memory: &mut MapMemory, viewport: Viewport) {
    debug!(?viewport, "fitting map to locations");
    map_memory.center_at(to_map_position(viewport.center()));
    if let Err(e) = map_memory.set_zoom(viewport.zoom()) {
        warn!(error = ?e, "could not fit the map to the locations");
    }
}
