//! Data layer: the plotted function, its sampling, and the numeric helpers
//! that place samples and ticks on screen. Nothing here touches egui.

pub mod axis;
pub mod function;
pub mod mapper;
pub mod range;
pub mod render_mode;
pub mod sampler;
pub mod ticks;
