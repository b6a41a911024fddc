use egui::{Color32, RichText};
use locations::OverlayView;

/// Detail popup of the record whose marker or card was clicked.
pub struct WidgetOverlay<'a> {
    view: &'a OverlayView,
}

impl<'a> WidgetOverlay<'a> {
    pub fn new(view: &'a OverlayView) -> Self {
        Self { view }
    }

    /// Shows the popup. Returns `false` once the user closed it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut open = true;

        egui::Window::new(RichText::new(self.view.name.as_str()).strong())
            .id(egui::Id::new("location_overlay"))
            .resizable(false)
            .collapsible(false)
            .open(&mut open)
            .anchor(egui::Align2::RIGHT_TOP, [-20.0, 20.0])
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(Color32::WHITE);

                if let Some(image) = &self.view.preview_image {
                    ui.add(
                        egui::Image::from_uri(image.clone())
                            .max_width(250.0)
                            .rounding(4.0),
                    );
                    ui.add_space(10.0);
                }

                ui.label(RichText::new(self.view.name.as_str()).size(18.0).strong());
                ui.add_space(4.0);

                ui.label(RichText::new("Members:").strong());
                for line in &self.view.member_lines {
                    ui.label(line.as_str());
                }

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Posted:").strong());
                    ui.label(self.view.date.as_str());
                });
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("Note:").strong());
                    ui.label(self.view.note.as_str());
                });
            });

        open
    }
}
