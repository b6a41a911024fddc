use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    bounds::{initial_viewport, Viewport},
    engine::{self, FilteredView},
    members::MemberRegistry,
    options,
    projection::{CardView, Carousel, MarkerView, OverlayView},
    query::{FilterQuery, MemberFilter},
    record::{LocationRecord, Position, RecordId},
};

/// Zoom applied when a card is clicked.
pub const CARD_FOCUS_ZOOM: f64 = 14.0;

/// A user interaction, produced by the interface.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    MemberChanged(MemberFilter),
    CountryChanged(String),
    CityChanged(String),
    SortToggled,
    Reset,
    CarouselAdvanced(RecordId),
    MarkerClicked(RecordId),
    CardClicked(RecordId),
    OverlayClosed,
}

/// Something the interface must do on its map surface or sidebar after a
/// message was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FocusOn { position: Position, zoom: Option<f64> },
    ScrollToCard(RecordId),
}

/// Initialization state of the interface. Nothing is filtered or rendered
/// before the records are `Ready`.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(Box<AppState>),
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// The loaded records together with everything derived from the current
/// filter selection.
#[derive(Debug, Clone)]
pub struct AppState {
    records: Vec<LocationRecord>,
    registry: MemberRegistry,
    query: FilterQuery,
    view: FilteredView,
    member_options: Vec<String>,
    country_options: Vec<String>,
    city_options: Vec<String>,
    carousels: HashMap<RecordId, Carousel>,
    overlay: Option<RecordId>,
}

impl AppState {
    /// Builds the state with the default query and runs the first filter
    /// pass.
    pub fn new(records: Vec<LocationRecord>) -> Self {
        let member_options = options::member_options(&records);
        let country_options = options::country_options(&records);
        let city_options = options::city_options(&records, "");

        let mut state = Self {
            records,
            registry: MemberRegistry::new(),
            query: FilterQuery::default(),
            view: FilteredView::default(),
            member_options,
            country_options,
            city_options,
            carousels: HashMap::new(),
            overlay: None,
        };
        state.refilter();
        state
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn record(&self, id: RecordId) -> Option<&LocationRecord> {
        self.records.get(id.0)
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn visible_count(&self) -> usize {
        self.view.visible_count()
    }

    pub fn member_options(&self) -> &[String] {
        &self.member_options
    }

    pub fn country_options(&self) -> &[String] {
        &self.country_options
    }

    pub fn city_options(&self) -> &[String] {
        &self.city_options
    }

    pub fn carousel(&self, id: RecordId) -> Option<&Carousel> {
        self.carousels.get(&id)
    }

    pub fn overlay(&self) -> Option<RecordId> {
        self.overlay
    }

    pub fn initial_viewport(&self) -> Option<Viewport> {
        initial_viewport(&self.records)
    }

    /// Cards for the visible records, in display order.
    pub fn cards(&self) -> Vec<CardView> {
        self.view
            .visible()
            .map(|id| CardView::project(id, &self.records[id.0], &self.registry))
            .collect()
    }

    /// Markers for the visible records.
    pub fn markers(&self) -> Vec<MarkerView> {
        self.view
            .visible()
            .map(|id| MarkerView::project(id, &self.records[id.0], &self.registry))
            .collect()
    }

    pub fn overlay_view(&self) -> Option<OverlayView> {
        let id = self.overlay?;
        let record = self.record(id)?;
        Some(OverlayView::project(id, record, &self.registry))
    }

    /// Applies a message and returns what the interface has to do next.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        debug!(?message, "handling message");
        match message {
            Message::MemberChanged(member) => {
                self.query.member = member;
                self.refilter();
                vec![]
            }
            Message::CountryChanged(country) => {
                self.city_options = options::city_options(&self.records, &country);
                self.query.country = country;
                self.query.city.clear();
                self.refilter();
                vec![]
            }
            Message::CityChanged(city) => {
                if !city.is_empty() && !self.city_options.contains(&city) {
                    warn!(
                        city = %city,
                        country = %self.query.country,
                        "city not offered for the selected country, ignoring"
                    );
                    return vec![];
                }
                self.query.city = city;
                self.refilter();
                vec![]
            }
            Message::SortToggled => {
                self.query.sort = self.query.sort.toggled();
                self.refilter();
                vec![]
            }
            Message::Reset => {
                self.query = FilterQuery::default();
                self.city_options = options::city_options(&self.records, "");
                self.refilter();
                vec![]
            }
            Message::CarouselAdvanced(id) => {
                if let Some(carousel) = self.carousels.get_mut(&id) {
                    carousel.advance();
                }
                vec![]
            }
            Message::MarkerClicked(id) => match self.open_overlay(id) {
                Some(position) => vec![
                    Effect::FocusOn {
                        position,
                        zoom: None,
                    },
                    Effect::ScrollToCard(id),
                ],
                None => vec![],
            },
            Message::CardClicked(id) => match self.open_overlay(id) {
                Some(position) => vec![
                    Effect::ScrollToCard(id),
                    Effect::FocusOn {
                        position,
                        zoom: Some(CARD_FOCUS_ZOOM),
                    },
                ],
                None => vec![],
            },
            Message::OverlayClosed => {
                self.overlay = None;
                vec![]
            }
        }
    }

    fn open_overlay(&mut self, id: RecordId) -> Option<Position> {
        if !self.view.is_visible(id) {
            debug!(%id, "click on a hidden or unknown record, ignoring");
            return None;
        }
        let position = self.record(id)?.position();
        self.overlay = Some(id);
        Some(position)
    }

    /// Reruns the filter pass from the current order. Carousels are rebuilt
    /// at their first image and any open popup is dismissed.
    fn refilter(&mut self) {
        let previous = self.view.order();
        self.view = engine::apply(&self.records, &previous, &self.query);
        self.overlay = None;

        self.carousels = self
            .view
            .visible()
            .filter_map(|id| Carousel::for_record(&self.records[id.0]).map(|c| (id, c)))
            .collect();
    }
}
