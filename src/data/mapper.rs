//! Affine mapping between a source interval and a target interval.
//!
//! Used for data-to-pixel placement on both axes and for spreading Y ticks
//! over the plot range. Target intervals may be inverted (`target_min >
//! target_max`), which is how the Y axis flips to screen rows.

/// Source intervals narrower than this map everything to the target midpoint.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Map `value` from `[source_min, source_max]` onto `[target_min, target_max]`.
///
/// ```
/// # use curveplot::data::mapper::map;
/// assert_eq!(map(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
/// // Degenerate source interval: midpoint of the target.
/// assert_eq!(map(42.0, 1.0, 1.0, 0.0, 10.0), 5.0);
/// ```
pub fn map(value: f64, source_min: f64, source_max: f64, target_min: f64, target_max: f64) -> f64 {
    let source_span = source_max - source_min;
    if source_span.abs() < DEGENERATE_EPSILON {
        return (target_min + target_max) / 2.0;
    }
    target_min + (value - source_min) * (target_max - target_min) / source_span
}

/// A fixed source/target interval pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    source: (f64, f64),
    target: (f64, f64),
}

impl LinearMap {
    pub fn new(source: (f64, f64), target: (f64, f64)) -> Self {
        Self { source, target }
    }

    /// Source to target.
    pub fn apply(&self, value: f64) -> f64 {
        map(value, self.source.0, self.source.1, self.target.0, self.target.1)
    }

    /// Target back to source.
    pub fn invert(&self, value: f64) -> f64 {
        map(value, self.target.0, self.target.1, self.source.0, self.source.1)
    }
}
