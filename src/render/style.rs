//! PlotStyle: colours, strokes and text sizes used by the scene builder.

use eframe::egui::{Color32, Stroke};

use crate::data::ticks::Y_TICK_COUNT;

/// Visual parameters for one plot.
///
/// Plain values owned by the app; nothing here holds a GPU or font resource.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Window background behind margins and labels.
    pub background: Color32,
    /// Fill of the plot rectangle.
    pub plot_background: Color32,
    pub axis: Stroke,
    pub grid: Stroke,
    pub curve: Stroke,
    pub marker_color: Color32,
    pub marker_radius: f32,
    pub text_color: Color32,
    pub label_size: f32,
    pub title_size: f32,
    /// Gap between the plot bottom and the X labels.
    pub x_label_gap: f32,
    /// Gap between the Y labels and the plot's left edge.
    pub y_label_gap: f32,
    /// Distance of the title from the top of the canvas.
    pub title_offset: f32,
    pub y_tick_count: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            plot_background: Color32::from_rgb(250, 250, 250),
            axis: Stroke::new(1.0, Color32::BLACK),
            grid: Stroke::new(1.0, Color32::from_rgb(211, 211, 211)),
            curve: Stroke::new(2.0, Color32::from_rgb(0, 0, 255)),
            marker_color: Color32::from_rgb(0, 0, 139),
            marker_radius: 3.0,
            text_color: Color32::BLACK,
            label_size: 11.0,
            title_size: 12.0,
            x_label_gap: 2.0,
            y_label_gap: 6.0,
            title_offset: 4.0,
            y_tick_count: Y_TICK_COUNT,
        }
    }
}
