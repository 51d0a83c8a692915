//! Color scheme definitions for the plot window.
//!
//! A [`ColorScheme`] sets the egui visuals for the surrounding UI (the mode
//! selector bar) and produces the [`PlotStyle`] used to draw the plot itself.

use eframe::egui::{Color32, Context, Stroke, Visuals};

use crate::render::style::PlotStyle;

/// Visual theme for the window.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// White window, light grey plot area, blue curve.
    #[default]
    Light,
    /// Dark window with a light curve.
    Dark,
}

impl ColorScheme {
    /// egui visuals for the surrounding widgets.
    pub fn visuals(&self) -> Visuals {
        match self {
            ColorScheme::Light => Visuals::light(),
            ColorScheme::Dark => Visuals::dark(),
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }

    /// Plot colours for this scheme.
    pub fn plot_style(&self) -> PlotStyle {
        match self {
            ColorScheme::Light => PlotStyle::default(),
            ColorScheme::Dark => {
                let fg = Color32::from_rgb(220, 220, 220);
                PlotStyle {
                    background: Color32::from_rgb(27, 27, 27),
                    plot_background: Color32::from_rgb(37, 37, 37),
                    axis: Stroke::new(1.0, fg),
                    grid: Stroke::new(1.0, Color32::from_rgb(70, 70, 70)),
                    curve: Stroke::new(2.0, Color32::from_rgb(100, 160, 255)),
                    marker_color: Color32::from_rgb(150, 190, 255),
                    text_color: fg,
                    ..PlotStyle::default()
                }
            }
        }
    }
}
