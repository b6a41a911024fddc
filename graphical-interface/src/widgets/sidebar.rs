use locations::{AppState, Message, RecordId};

use super::{View, WidgetCard, WidgetFilters};

/// Filters on top, the cards of the visible records below.
pub struct WidgetSidebar {
    filters: WidgetFilters,
    scroll_to: Option<RecordId>,
}

impl WidgetSidebar {
    pub fn new() -> Self {
        Self {
            filters: WidgetFilters,
            scroll_to: None,
        }
    }

    /// Brings the card of `id` into view on the next frame.
    pub fn scroll_to(&mut self, id: RecordId) {
        self.scroll_to = Some(id);
    }
}

impl Default for WidgetSidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl View for WidgetSidebar {
    fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, outbox: &mut Vec<Message>) {
        ui.add_space(8.0);
        self.filters.ui(ui, state, outbox);
        ui.add_space(8.0);
        ui.separator();

        let scroll_to = self.scroll_to.take();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let cards = state.cards();
                if cards.is_empty() {
                    ui.label("No locations match these filters.");
                }

                for card in &cards {
                    let response =
                        WidgetCard::new(card, state.carousel(card.id)).show(ui, outbox);
                    if scroll_to == Some(card.id) {
                        response.scroll_to_me(Some(egui::Align::TOP));
                    }
                    ui.add_space(6.0);
                }
            });
    }
}
