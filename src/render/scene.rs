//! Scene builder.
//!
//! Draw order: plot background, axes, X grid and labels, Y grid and labels,
//! the curve, then the title. Later commands paint over earlier ones.

use eframe::egui::{pos2, Align2, Rect};
use tracing::trace;

use crate::data::axis::AxisConfig;
use crate::data::function::FUNCTION_LABEL;
use crate::data::range::PlotRange;
use crate::data::render_mode::RenderMode;
use crate::data::sampler::SampleSeries;
use crate::data::ticks::{format_x_label, x_ticks, y_ticks};

use super::layout::{PlotLayout, PlotTransform};
use super::style::PlotStyle;
use super::{Canvas, Scene};

/// Build the draw commands for `series` inside `layout`.
///
/// `range` is the vertical extent to scale against, normally
/// [`PlotRange::from_series`] of the same series. `mode` only changes the
/// curve commands; background, grid, labels and title are identical for both
/// modes. Without a range (empty series) the scene still gets the frame, the
/// X axis and the title.
pub fn build_scene(
    series: &SampleSeries,
    range: Option<&PlotRange>,
    axis: &AxisConfig,
    layout: &PlotLayout,
    mode: RenderMode,
    style: &PlotStyle,
) -> Scene {
    let plot = layout.plot;
    let mut scene = Scene::default();

    scene.rect_filled(plot, style.plot_background);
    push_axes(&mut scene, plot, style);
    push_x_grid(&mut scene, series, axis, plot, style);

    if let Some(range) = range {
        push_y_grid(&mut scene, range, plot, style);
        let transform = PlotTransform::new(axis, range, plot);
        match mode {
            RenderMode::Line => push_line(&mut scene, series, &transform, style),
            RenderMode::Points => push_points(&mut scene, series, axis, &transform, plot, style),
        }
    }

    scene.text(
        pos2(plot.left(), layout.canvas.top() + style.title_offset),
        Align2::LEFT_TOP,
        FUNCTION_LABEL,
        style.title_size,
        style.text_color,
    );

    trace!(commands = scene.len(), %mode, "built scene");
    scene
}

fn push_axes(canvas: &mut impl Canvas, plot: Rect, style: &PlotStyle) {
    canvas.line(plot.left_bottom(), plot.right_bottom(), style.axis);
    canvas.line(plot.left_top(), plot.left_bottom(), style.axis);
}

fn push_x_grid(
    canvas: &mut impl Canvas,
    series: &SampleSeries,
    axis: &AxisConfig,
    plot: Rect,
    style: &PlotStyle,
) {
    let columns = (plot.left() as f64, plot.right() as f64);
    for tick in x_ticks(series, axis, columns) {
        let x = tick.position as f32;
        canvas.line(pos2(x, plot.top()), pos2(x, plot.bottom()), style.grid);
        canvas.text(
            pos2(x, plot.bottom() + style.x_label_gap),
            Align2::CENTER_TOP,
            &tick.label,
            style.label_size,
            style.text_color,
        );
    }
}

fn push_y_grid(canvas: &mut impl Canvas, range: &PlotRange, plot: Rect, style: &PlotStyle) {
    let rows = (plot.bottom() as f64, plot.top() as f64);
    for tick in y_ticks(range, style.y_tick_count, rows) {
        let y = tick.position as f32;
        canvas.line(pos2(plot.left(), y), pos2(plot.right(), y), style.grid);
        canvas.text(
            pos2(plot.left() - style.y_label_gap, y),
            Align2::RIGHT_CENTER,
            &tick.label,
            style.label_size,
            style.text_color,
        );
    }
}

fn push_line(
    canvas: &mut impl Canvas,
    series: &SampleSeries,
    transform: &PlotTransform,
    style: &PlotStyle,
) {
    for pair in series.as_slice().windows(2) {
        canvas.line(
            transform.sample_to_screen(&pair[0]),
            transform.sample_to_screen(&pair[1]),
            style.curve,
        );
    }
}

/// Markers, each with a `t=...` label one text row below the X tick labels.
fn push_points(
    canvas: &mut impl Canvas,
    series: &SampleSeries,
    axis: &AxisConfig,
    transform: &PlotTransform,
    plot: Rect,
    style: &PlotStyle,
) {
    let decimals = axis.label_decimals();
    let label_y = plot.bottom() + 2.0 * style.x_label_gap + style.label_size;
    for sample in series {
        let center = transform.sample_to_screen(sample);
        canvas.circle_filled(center, style.marker_radius, style.marker_color);
        canvas.text(
            pos2(center.x, label_y),
            Align2::CENTER_TOP,
            &format!("t={}", format_x_label(sample.t, decimals)),
            style.label_size,
            style.marker_color,
        );
    }
}
