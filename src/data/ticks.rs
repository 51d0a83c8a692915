//! Axis ticks: positions and labels.
//!
//! X ticks sit exactly at the sampled `t` values. Y ticks split the plot range
//! into [`Y_TICK_COUNT`] equal intervals. Both go through [`map`] so gridlines
//! land on the same pixels as the curve.

use super::axis::AxisConfig;
use super::mapper::map;
use super::range::PlotRange;
use super::sampler::{round_to, SampleSeries};

/// Number of intervals on the Y axis (7 gridlines).
pub const Y_TICK_COUNT: usize = 6;

const Y_LABEL_DECIMALS: usize = 3;

/// A labelled reference value and its pixel position along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// One tick per sample, placed along `columns` (left, right).
pub fn x_ticks(series: &SampleSeries, axis: &AxisConfig, columns: (f64, f64)) -> Vec<Tick> {
    let decimals = axis.label_decimals();
    series
        .ts()
        .map(|t| Tick {
            value: t,
            position: map(t, axis.start(), axis.end(), columns.0, columns.1),
            label: format_x_label(t, decimals),
        })
        .collect()
}

/// `tick_count + 1` ticks from `range.min` to `range.max`, placed along
/// `rows` (bottom, top).
pub fn y_ticks(range: &PlotRange, tick_count: usize, rows: (f64, f64)) -> Vec<Tick> {
    (0..=tick_count)
        .map(|i| {
            let value = map(i as f64, 0.0, tick_count as f64, range.min, range.max);
            Tick {
                value,
                position: map(value, range.min, range.max, rows.0, rows.1),
                label: format_y_label(value),
            }
        })
        .collect()
}

/// Fixed-point label, e.g. `0.2` for one decimal.
pub fn format_x_label(t: f64, decimals: usize) -> String {
    format!("{t:.decimals$}")
}

/// Up to three decimals with trailing zeros dropped: `1.5`, `2`, `-0.063`.
pub fn format_y_label(y: f64) -> String {
    let rounded = round_to(y, Y_LABEL_DECIMALS);
    let text = format!("{rounded:.prec$}", prec = Y_LABEL_DECIMALS);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_labels_trim_trailing_zeros() {
        assert_eq!(format_y_label(1.5), "1.5");
        assert_eq!(format_y_label(2.0), "2");
        assert_eq!(format_y_label(0.12345), "0.123");
        assert_eq!(format_y_label(0.0625), "0.063");
        assert_eq!(format_y_label(-0.0625), "-0.063");
    }

    #[test]
    fn y_label_never_prints_negative_zero() {
        assert_eq!(format_y_label(-0.0001), "0");
        assert_eq!(format_y_label(-0.0), "0");
    }

    #[test]
    fn x_labels_use_fixed_decimals() {
        assert_eq!(format_x_label(0.2, 1), "0.2");
        assert_eq!(format_x_label(1.0, 1), "1.0");
        assert_eq!(format_x_label(0.25, 2), "0.25");
    }
}
