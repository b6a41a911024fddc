use egui::{Color32, RichText, Sense};
use locations::{projection::NAVIGATION_LABEL, CardView, Carousel, Message};

const CAROUSEL_HEIGHT: f32 = 140.0;

/// A sidebar card for one visible record.
pub struct WidgetCard<'a> {
    card: &'a CardView,
    carousel: Option<&'a Carousel>,
}

impl<'a> WidgetCard<'a> {
    pub fn new(card: &'a CardView, carousel: Option<&'a Carousel>) -> Self {
        Self { card, carousel }
    }

    /// Draws the card. Links and the carousel sit outside the clickable
    /// details area, so clicking them never counts as a click on the card.
    pub fn show(self, ui: &mut egui::Ui, outbox: &mut Vec<Message>) -> egui::Response {
        egui::Frame::group(ui.style())
            .rounding(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.style_mut().interaction.selectable_labels = false;

                ui.horizontal_top(|ui| {
                    let details = ui
                        .vertical(|ui| self.details(ui))
                        .response
                        .interact(Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if details.clicked() {
                        outbox.push(Message::CardClicked(self.card.id));
                    }

                    if let Some(carousel) = self.carousel {
                        if Self::carousel(ui, carousel) {
                            outbox.push(Message::CarouselAdvanced(self.card.id));
                        }
                    }
                });

                self.links(ui);
            })
            .response
    }

    fn details(&self, ui: &mut egui::Ui) {
        let card = self.card;
        ui.label(
            RichText::new(format!("{} {}", card.symbol_line, card.name))
                .strong()
                .size(16.0),
        );
        ui.label(card.place.as_str());
        ui.label(format!("Members: {}", card.members));
        ui.label(format!("Posted: {}", card.date));
        if !card.note.is_empty() {
            ui.label(format!("Note: {}", card.note));
        }
    }

    fn links(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for link in &self.card.source_links {
                ui.hyperlink_to(link.kind.label(), &link.url);
            }
            ui.hyperlink_to(NAVIGATION_LABEL, &self.card.navigation_url);
        });
    }

    /// Returns whether the image was clicked.
    fn carousel(ui: &mut egui::Ui, carousel: &Carousel) -> bool {
        ui.vertical(|ui| {
            let clicked = ui
                .add(
                    egui::Image::from_uri(carousel.current_image().to_owned())
                        .max_height(CAROUSEL_HEIGHT)
                        .max_width(CAROUSEL_HEIGHT)
                        .rounding(4.0)
                        .sense(Sense::click()),
                )
                .on_hover_text("Next photo")
                .clicked();

            ui.label(
                RichText::new(format!(
                    "{}/{} photos",
                    carousel.current_index() + 1,
                    carousel.len()
                ))
                .small()
                .color(Color32::LIGHT_GRAY),
            );
            clicked
        })
        .inner
    }
}
