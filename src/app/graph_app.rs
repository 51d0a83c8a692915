//! Standalone plot application.
//!
//! [`GraphApp`] owns the sampled series (computed once at construction), the
//! selected [`RenderMode`] and the plot style, and implements
//! [`eframe::App`] so it can run as a native window.

use eframe::egui;
use tracing::{debug, info};

use crate::color_scheme::ColorScheme;
use crate::config::GraphConfig;
use crate::data::axis::AxisConfig;
use crate::data::range::PlotRange;
use crate::data::render_mode::RenderMode;
use crate::data::sampler::{sample, SampleSeries};
use crate::render::{build_scene, EguiCanvas, PlotLayout, PlotMargins, PlotStyle, Scene};

/// The plot window's state.
pub struct GraphApp {
    axis: AxisConfig,
    series: SampleSeries,
    range: Option<PlotRange>,
    render_mode: RenderMode,
    margins: PlotMargins,
    style: PlotStyle,
    color_scheme: ColorScheme,
    /// Flag so we only apply the color scheme on the very first frame.
    color_scheme_applied: bool,
}

impl GraphApp {
    /// Sample the function over `cfg.axis` and set up styling.
    pub fn new(cfg: &GraphConfig) -> Self {
        let series = sample(&cfg.axis);
        let range = PlotRange::from_series(&series);
        info!(
            samples = series.len(),
            min_y = range.map(|r| r.min),
            max_y = range.map(|r| r.max),
            "prepared plot"
        );
        Self {
            axis: cfg.axis,
            series,
            range,
            render_mode: cfg.render_mode,
            margins: cfg.margins,
            style: cfg.color_scheme.plot_style(),
            color_scheme: cfg.color_scheme.clone(),
            color_scheme_applied: false,
        }
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    pub fn range(&self) -> Option<PlotRange> {
        self.range
    }

    pub fn axis(&self) -> &AxisConfig {
        &self.axis
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        if self.render_mode != mode {
            debug!(from = %self.render_mode, to = %mode, "render mode changed");
            self.render_mode = mode;
        }
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Draw commands for a canvas occupying `canvas`; empty if the canvas is
    /// too small to hold the plot inside its margins.
    pub fn scene(&self, canvas: egui::Rect) -> Scene {
        match PlotLayout::new(canvas, &self.margins) {
            Some(layout) => build_scene(
                &self.series,
                self.range.as_ref(),
                &self.axis,
                &layout,
                self.render_mode,
                &self.style,
            ),
            None => Scene::default(),
        }
    }

    /// Paint the plot into the remaining space of `ui`.
    fn show_plot(&self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        painter.rect_filled(response.rect, 0.0, self.style.background);
        self.scene(response.rect)
            .paint(&mut EguiCanvas::new(&painter));
    }
}

impl eframe::App for GraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply color scheme once on the first frame (after egui context is available).
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        egui::TopBottomPanel::top("curveplot_controls").show(ctx, |ui| {
            self.render_mode_bar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.style.background))
            .show(ctx, |ui| self.show_plot(ui));
    }
}
