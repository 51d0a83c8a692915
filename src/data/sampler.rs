//! Sampling the plotted function on a fixed grid.
//!
//! [`sample`] walks `t = start, start + step, ...` up to `end` (inclusive within
//! [`END_TOLERANCE`]) and keeps only points where the function is defined.
//! Grid point `i` is computed as `start + i * step` and re-rounded to ten
//! decimals, so it never drifts past `end` and the walk always terminates.

use tracing::debug;

use super::axis::AxisConfig;
use super::function::evaluate;

/// How far past `end` the last grid point may land and still be sampled.
pub const END_TOLERANCE: f64 = 1e-9;

const GRID_DECIMALS: usize = 10;

/// One evaluated point of the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub y: f64,
}

/// Samples ordered by increasing `t`, all with finite `y`.
///
/// Built once by [`sample`] or [`sample_with`]; there is no API to modify it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The `t` values of all samples, in order.
    pub fn ts(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.t)
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Sample the target function `(tan(2t) - 3t) / (t + 3)` over `axis`.
pub fn sample(axis: &AxisConfig) -> SampleSeries {
    sample_with(axis, evaluate)
}

/// Sample an arbitrary function over `axis`.
///
/// `f` returns `None` where it is undefined; such points, and points with a
/// non-finite value, are left out of the series.
pub fn sample_with<F>(axis: &AxisConfig, f: F) -> SampleSeries
where
    F: Fn(f64) -> Option<f64>,
{
    let decimals = axis.label_decimals();
    let limit = axis.end() + END_TOLERANCE;
    let last = ((limit - axis.start()) / axis.step()).floor() as usize;
    let mut samples = Vec::with_capacity(last + 1);
    for i in 0..=last {
        let t = round_to(axis.start() + i as f64 * axis.step(), GRID_DECIMALS);
        if t > limit {
            break;
        }
        match f(t).filter(|y| y.is_finite()) {
            Some(y) => samples.push(Sample {
                t: round_to(t, decimals),
                y,
            }),
            None => debug!(t, "skipping undefined sample"),
        }
    }
    debug!(
        count = samples.len(),
        start = axis.start(),
        end = axis.end(),
        step = axis.step(),
        "sampled series"
    );
    SampleSeries { samples }
}

/// Round half away from zero to `decimals` places.
///
/// Values too large to carry that many decimals in an `f64` are returned
/// unchanged.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_removes_summation_drift() {
        assert_eq!(round_to(0.1 + 0.2, 10), 0.3);
        assert_eq!(round_to(0.25, 1), 0.3);
        assert_eq!(round_to(-0.25, 1), -0.3);
    }

    #[test]
    fn round_to_leaves_huge_values_alone() {
        assert_eq!(round_to(1e9 + 0.5, 10), 1e9 + 0.5);
        assert_eq!(round_to(1e300, 10), 1e300);
    }
}
