mod card;
mod filters;
mod overlay;
mod sidebar;
pub use card::WidgetCard;
pub use filters::WidgetFilters;
pub use overlay::WidgetOverlay;
pub use sidebar::WidgetSidebar;

use locations::{AppState, Message};

/// A widget reads the application state and reports interactions as
/// messages instead of changing the state itself.
pub trait View {
    fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, outbox: &mut Vec<Message>);
}
