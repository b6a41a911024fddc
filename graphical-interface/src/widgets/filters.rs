use egui::{Color32, RichText};
use locations::{query::ALL_MEMBERS, AppState, MemberFilter, Message, SortOrder};

use super::View;

const ALL_COUNTRIES: &str = "All countries";
const ALL_CITIES: &str = "All cities";

/// Member, country and city dropdowns, the sort toggle, the reset button and
/// the visible count.
pub struct WidgetFilters;

impl WidgetFilters {
    fn member_filter(ui: &mut egui::Ui, state: &AppState, outbox: &mut Vec<Message>) {
        let current = &state.query().member;
        let mut selected = current.clone();

        egui::ComboBox::from_id_salt("member_filter")
            .selected_text(selected.to_string())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, MemberFilter::All, ALL_MEMBERS);
                for member in state.member_options() {
                    ui.selectable_value(
                        &mut selected,
                        MemberFilter::Member(member.clone()),
                        member.as_str(),
                    );
                }
            });

        if selected != *current {
            outbox.push(Message::MemberChanged(selected));
        }
    }

    fn country_filter(ui: &mut egui::Ui, state: &AppState, outbox: &mut Vec<Message>) {
        if let Some(country) = dropdown(
            ui,
            "country_filter",
            ALL_COUNTRIES,
            &state.query().country,
            state.country_options(),
        ) {
            outbox.push(Message::CountryChanged(country));
        }
    }

    fn city_filter(ui: &mut egui::Ui, state: &AppState, outbox: &mut Vec<Message>) {
        if let Some(city) = dropdown(
            ui,
            "city_filter",
            ALL_CITIES,
            &state.query().city,
            state.city_options(),
        ) {
            outbox.push(Message::CityChanged(city));
        }
    }

    fn sort_toggle(ui: &mut egui::Ui, state: &AppState, outbox: &mut Vec<Message>) {
        let order = state.query().sort;
        let fill = match order {
            SortOrder::Newest => Color32::from_rgb(247, 163, 0),
            SortOrder::Oldest => Color32::from_rgb(76, 175, 80),
        };
        let button = egui::Button::new(RichText::new(order.toggle_label()).color(Color32::WHITE))
            .fill(fill)
            .rounding(6.0);

        if ui.add(button).clicked() {
            outbox.push(Message::SortToggled);
        }
    }
}

impl View for WidgetFilters {
    fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, outbox: &mut Vec<Message>) {
        ui.horizontal_wrapped(|ui| {
            Self::member_filter(ui, state, outbox);
            Self::country_filter(ui, state, outbox);
            Self::city_filter(ui, state, outbox);
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            Self::sort_toggle(ui, state, outbox);
            if ui.button("Reset").clicked() {
                outbox.push(Message::Reset);
            }
            ui.label(
                RichText::new(format!("{} locations", state.visible_count()))
                    .size(16.0)
                    .strong(),
            );
        });
    }
}

/// A dropdown over string options where the empty string stands for "all".
/// Returns the new value when the user picked a different one.
fn dropdown(
    ui: &mut egui::Ui,
    id: &str,
    all_label: &str,
    current: &str,
    options: &[String],
) -> Option<String> {
    let mut selected = current.to_string();
    let shown = if selected.is_empty() {
        all_label.to_string()
    } else {
        selected.clone()
    };

    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, String::new(), all_label);
            for option in options {
                ui.selectable_value(&mut selected, option.clone(), option.as_str());
            }
        });

    (selected != current).then_some(selected)
}
