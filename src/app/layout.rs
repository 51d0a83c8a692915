//! Top bar: the render-mode selector.

use eframe::egui;

use crate::data::render_mode::RenderMode;

use super::GraphApp;

impl GraphApp {
    /// Render the "Line" / "Points" combo box.
    ///
    /// A new selection is stored on the app; egui repaints after the
    /// interaction, so the next frame draws the new mode.
    pub(super) fn render_mode_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut mode = self.render_mode();
            egui::ComboBox::from_label("Mode")
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for m in RenderMode::all() {
                        ui.selectable_value(&mut mode, *m, m.label());
                    }
                });
            if mode != self.render_mode() {
                self.set_render_mode(mode);
                ui.ctx().request_repaint();
            }
        });
    }
}
