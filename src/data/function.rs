//! The plotted function `y = (tan(2t) - 3t) / (t + 3)`.

/// Label drawn above the plot.
pub const FUNCTION_LABEL: &str = "y = (tan(2t) - 3t) / (t + 3)";

/// Below this magnitude the denominator `t + 3` is treated as zero.
pub const DENOMINATOR_EPSILON: f64 = 1e-8;

/// Evaluate the target function at `t`.
///
/// Returns `None` where the function is undefined (`|t + 3| < 1e-8`) or where
/// the result is not finite, e.g. at the poles of `tan(2t)`.
///
/// ```
/// # use curveplot::data::function::evaluate;
/// assert!(evaluate(-3.0).is_none());
/// assert!(evaluate(0.5).is_some());
/// ```
pub fn evaluate(t: f64) -> Option<f64> {
    let denominator = t + 3.0;
    if denominator.abs() < DENOMINATOR_EPSILON {
        return None;
    }
    let y = ((2.0 * t).tan() - 3.0 * t) / denominator;
    y.is_finite().then_some(y)
}
