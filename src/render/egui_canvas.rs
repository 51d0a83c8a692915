//! [`Canvas`] implementation on top of `egui::Painter`.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke};

use super::Canvas;

/// Forwards scene primitives to an egui painter.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter.line_segment([from, to], stroke);
    }

    fn circle_filled(&mut self, center: Pos2, radius: f32, fill: Color32) {
        self.painter.circle_filled(center, radius, fill);
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32) {
        self.painter
            .text(pos, anchor, text, FontId::proportional(size), color);
    }

    fn rect_filled(&mut self, rect: Rect, fill: Color32) {
        self.painter.rect_filled(rect, 0.0, fill);
    }
}
