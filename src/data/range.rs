//! Vertical extent of a sampled series.

use super::sampler::SampleSeries;

/// Spreads narrower than this are widened so the Y scale never collapses.
pub const FLAT_EPSILON: f64 = 1e-6;

/// `[min, max]` interval used to scale `y` values to pixel rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRange {
    pub min: f64,
    pub max: f64,
}

impl PlotRange {
    /// Range covering every `y` in `series`, or `None` for an empty series.
    ///
    /// If all values lie within [`FLAT_EPSILON`] of each other the range is
    /// widened by exactly 1 on both sides.
    pub fn from_series(series: &SampleSeries) -> Option<Self> {
        Self::from_values(series.iter().map(|s| s.y))
    }

    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })?;
        if max - min < FLAT_EPSILON {
            return Some(Self {
                min: min - 1.0,
                max: max + 1.0,
            });
        }
        Some(Self { min, max })
    }
}
