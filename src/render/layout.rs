//! Plot rectangle inside the canvas, and the data-to-screen transform.

use eframe::egui::{pos2, Pos2, Rect};

use crate::data::axis::AxisConfig;
use crate::data::mapper::LinearMap;
use crate::data::range::PlotRange;
use crate::data::sampler::Sample;

/// Space reserved around the plot for labels and the title, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMargins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left: 50.0,
            top: 30.0,
            right: 30.0,
            bottom: 50.0,
        }
    }
}

/// Canvas rectangle and the plot rectangle carved out of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub canvas: Rect,
    pub plot: Rect,
}

impl PlotLayout {
    /// `None` when the margins leave no positive area for the plot.
    pub fn new(canvas: Rect, margins: &PlotMargins) -> Option<Self> {
        let plot = Rect::from_min_max(
            pos2(canvas.left() + margins.left, canvas.top() + margins.top),
            pos2(
                canvas.right() - margins.right,
                canvas.bottom() - margins.bottom,
            ),
        );
        (plot.width() > 0.0 && plot.height() > 0.0).then_some(Self { canvas, plot })
    }
}

/// Maps `(t, y)` to screen positions inside a plot rectangle.
///
/// Rows grow downward, so the Y map runs from `plot.bottom()` to `plot.top()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    pub x: LinearMap,
    pub y: LinearMap,
}

impl PlotTransform {
    pub fn new(axis: &AxisConfig, range: &PlotRange, plot: Rect) -> Self {
        Self {
            x: LinearMap::new(
                (axis.start(), axis.end()),
                (plot.left() as f64, plot.right() as f64),
            ),
            y: LinearMap::new(
                (range.min, range.max),
                (plot.bottom() as f64, plot.top() as f64),
            ),
        }
    }

    pub fn to_screen(&self, t: f64, y: f64) -> Pos2 {
        pos2(self.x.apply(t) as f32, self.y.apply(y) as f32)
    }

    pub fn sample_to_screen(&self, sample: &Sample) -> Pos2 {
        self.to_screen(sample.t, sample.y)
    }
}
