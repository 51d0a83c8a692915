//! Domain and step of the independent variable `t`.

use crate::error::{Error, Result};

/// Smallest accepted step; the sampler advances `t` on a 1e-10 grid.
pub const MIN_STEP: f64 = 1e-9;

/// Smallest accepted step relative to the largest `|t|` on the axis, so that
/// consecutive grid points stay distinct in `f64`.
pub const MIN_RELATIVE_STEP: f64 = 1e-12;

/// Upper bound on grid points per axis.
pub const MAX_SAMPLES: f64 = 1_000_000.0;

const MIN_LABEL_DECIMALS: usize = 1;
const MAX_LABEL_DECIMALS: usize = 9;

/// Sampling domain `[start, end]` walked with a fixed `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    start: f64,
    end: f64,
    step: f64,
}

/// The domain the window plots: `t` from 0.2 to 0.8 in steps of 0.1.
pub const DEFAULT_AXIS: AxisConfig = AxisConfig {
    start: 0.2,
    end: 0.8,
    step: 0.1,
};

impl AxisConfig {
    /// Validate and build an axis configuration.
    ///
    /// All values must be finite, `end >= start` and `step >= MIN_STEP`.
    /// The step must also be resolvable at the axis magnitude
    /// ([`MIN_RELATIVE_STEP`]) and the domain may hold at most
    /// [`MAX_SAMPLES`] grid points.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        let finite = start.is_finite() && end.is_finite() && step.is_finite();
        if !finite || end < start || step < MIN_STEP {
            return Err(Error::InvalidAxis { start, end, step });
        }
        let magnitude = start.abs().max(end.abs());
        if step < magnitude * MIN_RELATIVE_STEP || (end - start) / step > MAX_SAMPLES {
            return Err(Error::InvalidAxis { start, end, step });
        }
        Ok(Self { start, end, step })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Decimal places needed to print every `t` on this grid without
    /// collisions. At least one, so the default axis prints `0.2`, `0.3`, ...
    pub fn label_decimals(&self) -> usize {
        decimals_of(self.start)
            .max(decimals_of(self.step))
            .max(MIN_LABEL_DECIMALS)
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        DEFAULT_AXIS
    }
}

/// Fewest decimals that print `value` without losing its leading digit.
fn decimals_of(value: f64) -> usize {
    (0..=MAX_LABEL_DECIMALS)
        .find(|&d| {
            let scaled = value * 10f64.powi(d as i32);
            let rounded = scaled.round();
            (scaled - rounded).abs() < 1e-6 && (rounded != 0.0 || value == 0.0)
        })
        .unwrap_or(MAX_LABEL_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_axis_uses_one_decimal() {
        assert_eq!(DEFAULT_AXIS.label_decimals(), 1);
    }

    #[test]
    fn finer_steps_need_more_decimals() {
        let axis = AxisConfig::new(0.0, 1.0, 0.05).unwrap();
        assert_eq!(axis.label_decimals(), 2);
        let axis = AxisConfig::new(0.125, 1.0, 0.5).unwrap();
        assert_eq!(axis.label_decimals(), 3);
    }

    #[test]
    fn sub_micro_steps_keep_their_digits() {
        let axis = AxisConfig::new(0.0, 1e-6, 1e-7).unwrap();
        assert_eq!(axis.label_decimals(), 7);
        let axis = AxisConfig::new(0.0, 1e-8, MIN_STEP).unwrap();
        assert_eq!(axis.label_decimals(), 9);
    }

    #[test]
    fn steps_too_small_for_the_magnitude_are_rejected() {
        assert!(AxisConfig::new(1e9, 1e9 + 1e-6, 1e-8).is_err());
        assert!(AxisConfig::new(1e9, 1e9 + 1.0, 0.5).is_ok());
    }

    #[test]
    fn oversized_grids_are_rejected() {
        assert!(AxisConfig::new(0.0, 1.0, 1e-7).is_err());
        assert!(AxisConfig::new(0.0, 1.0, 2e-6).is_ok());
    }

    #[test]
    fn integer_grid_still_prints_one_decimal() {
        let axis = AxisConfig::new(0.0, 10.0, 1.0).unwrap();
        assert_eq!(axis.label_decimals(), 1);
    }
}
