//! Configuration for the plot window.
//!
//! Everything has a default reproducing the stock window; nothing is read
//! from or written to disk.

use crate::color_scheme::ColorScheme;
use crate::data::axis::{AxisConfig, DEFAULT_AXIS};
use crate::data::render_mode::RenderMode;
use crate::render::layout::PlotMargins;

/// Native window title.
pub const WINDOW_TITLE: &str = "Графік y = (tan(2t) - 3t) / (t + 3)";

// ─────────────────────────────────────────────────────────────────────────────
// Window sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Initial and minimum inner size of the native window, in points.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSize {
    pub initial: [f32; 2],
    pub min: [f32; 2],
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            initial: [800.0, 600.0],
            min: [400.0, 300.0],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GraphConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the plot window.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `axis`           | Domain and step of `t` |
/// | `render_mode`    | Mode selected when the window opens |
/// | `margins`        | Space around the plot rectangle |
/// | `color_scheme`   | Widget visuals and plot colours |
/// | `window`         | Initial and minimum window size |
#[derive(Clone)]
pub struct GraphConfig {
    /// Native window title.
    pub title: String,
    /// Sampling domain.
    pub axis: AxisConfig,
    /// Initial curve presentation.
    pub render_mode: RenderMode,
    /// Margins around the plot rectangle.
    pub margins: PlotMargins,
    /// Color scheme / visual theme.
    pub color_scheme: ColorScheme,
    /// Window sizing applied when `native_options` does not set it.
    pub window: WindowSize,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            axis: DEFAULT_AXIS,
            render_mode: RenderMode::default(),
            margins: PlotMargins::default(),
            color_scheme: ColorScheme::default(),
            window: WindowSize::default(),
            native_options: None,
        }
    }
}
