use std::{cell::RefCell, rc::Rc};

use egui::{Color32, Rect, Response, Sense, Stroke, Vec2};
use locations::{MarkerView, MemberColor, Message, RecordId};
use walkers::{Plugin, Projector};

use crate::map::to_map_position;

const MARKER_SIZE: f32 = 22.0;

/// Draws one pin per visible record and reports clicks as messages.
pub struct Markers<'a> {
    markers: &'a [MarkerView],
    selected: Option<RecordId>,
    outbox: Rc<RefCell<Vec<Message>>>,
}

impl<'a> Markers<'a> {
    pub fn new(
        markers: &'a [MarkerView],
        selected: Option<RecordId>,
        outbox: Rc<RefCell<Vec<Message>>>,
    ) -> Self {
        Self {
            markers,
            selected,
            outbox,
        }
    }
}

impl Plugin for Markers<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for marker in self.markers {
            let is_selected = self.selected == Some(marker.id);
            if draw(ui, projector, marker, is_selected) {
                self.outbox
                    .borrow_mut()
                    .push(Message::MarkerClicked(marker.id));
            }
        }
    }
}

/// Returns whether the marker was clicked.
fn draw(ui: &mut egui::Ui, projector: &Projector, marker: &MarkerView, is_selected: bool) -> bool {
    let screen_position = projector
        .project(to_map_position(marker.position))
        .to_pos2();

    let clickable_area = Rect::from_center_size(screen_position, Vec2::splat(MARKER_SIZE));
    let response = ui
        .allocate_rect(clickable_area, Sense::click())
        .on_hover_text(marker.title.as_str());

    let radius = if response.hovered() || is_selected {
        MARKER_SIZE / 2.0
    } else {
        MARKER_SIZE / 2.0 - 3.0
    };
    let outline = if is_selected {
        Stroke::new(3.0, Color32::YELLOW)
    } else {
        Stroke::new(2.0, Color32::BLACK)
    };

    ui.painter()
        .circle(screen_position, radius, member_color(marker.color), outline);

    response.clicked()
}

fn member_color(color: MemberColor) -> Color32 {
    match color {
        MemberColor::Blue => Color32::from_rgb(40, 110, 230),
        MemberColor::Pink => Color32::from_rgb(240, 120, 180),
        MemberColor::White => Color32::WHITE,
        MemberColor::Purple => Color32::from_rgb(150, 80, 200),
        MemberColor::Orange => Color32::from_rgb(247, 163, 0),
    }
}
