//! Error types for curveplot.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or launching the plot window.
///
/// Evaluating the plotted function never fails: points where it is undefined
/// are skipped by the sampler instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Domain or step rejected by [`AxisConfig::new`](crate::data::axis::AxisConfig::new).
    #[error("Invalid axis: start={start}, end={end}, step={step}")]
    InvalidAxis {
        /// Requested domain start.
        start: f64,
        /// Requested domain end.
        end: f64,
        /// Requested step.
        step: f64,
    },

    /// The native window could not be created or the event loop failed.
    #[error("Window error: {0}")]
    Window(#[from] eframe::Error),
}
