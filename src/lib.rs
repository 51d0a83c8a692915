//! curveplot crate root: re-exports and module wiring.
//!
//! Plots `y = (tan(2t) - 3t) / (t + 3)` for `t` in `[0.2, 0.8]` in a native
//! egui/eframe window, as a line or as discrete points.
//!
//! - `data`: the function, sampling, coordinate mapping and ticks
//! - `render`: scene of draw commands and the canvas they replay onto
//! - `app`: the eframe application and its entry point
//! - `config`: window configuration with defaults
//! - `color_scheme`: widget visuals and plot colours

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod render;

// Public re-exports for a compact external API
pub use app::{run_graph, GraphApp};
pub use color_scheme::ColorScheme;
pub use config::{GraphConfig, WINDOW_TITLE};
pub use data::axis::{AxisConfig, DEFAULT_AXIS};
pub use data::mapper::{map, LinearMap};
pub use data::range::PlotRange;
pub use data::render_mode::RenderMode;
pub use data::sampler::{sample, sample_with, Sample, SampleSeries};
pub use error::{Error, Result};
pub use render::{build_scene, Canvas, DrawCommand, Scene};
