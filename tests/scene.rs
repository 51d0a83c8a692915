use approx::assert_abs_diff_eq;
use curveplot::data::axis::{AxisConfig, DEFAULT_AXIS};
use curveplot::data::function::FUNCTION_LABEL;
use curveplot::data::range::PlotRange;
use curveplot::data::render_mode::RenderMode;
use curveplot::data::sampler::{sample, sample_with, SampleSeries};
use curveplot::render::*;
use egui::{pos2, vec2, Align2, Rect};

fn canvas() -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
}

fn scene_for(series: &SampleSeries, mode: RenderMode) -> Scene {
    let layout = PlotLayout::new(canvas(), &PlotMargins::default()).unwrap();
    let range = PlotRange::from_series(series);
    build_scene(
        series,
        range.as_ref(),
        &DEFAULT_AXIS,
        &layout,
        mode,
        &PlotStyle::default(),
    )
}

fn curve_lines(scene: &Scene) -> Vec<&DrawCommand> {
    let curve = PlotStyle::default().curve;
    scene
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { stroke, .. } if *stroke == curve))
        .collect()
}

fn circles(scene: &Scene) -> Vec<(egui::Pos2, f32)> {
    scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
        .collect()
}

fn texts(scene: &Scene) -> Vec<&str> {
    scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn scene_starts_with_background_and_axes() {
    let style = PlotStyle::default();
    let scene = scene_for(&sample(&DEFAULT_AXIS), RenderMode::Line);
    let plot = Rect::from_min_max(pos2(50.0, 30.0), pos2(770.0, 550.0));

    assert_eq!(
        scene.commands()[0],
        DrawCommand::Rect {
            rect: plot,
            fill: style.plot_background
        }
    );
    assert_eq!(
        scene.commands()[1],
        DrawCommand::Line {
            from: pos2(50.0, 550.0),
            to: pos2(770.0, 550.0),
            stroke: style.axis
        }
    );
    assert_eq!(
        scene.commands()[2],
        DrawCommand::Line {
            from: pos2(50.0, 30.0),
            to: pos2(50.0, 550.0),
            stroke: style.axis
        }
    );
}

#[test]
fn scene_ends_with_title() {
    let scene = scene_for(&sample(&DEFAULT_AXIS), RenderMode::Points);
    match scene.commands().last() {
        Some(DrawCommand::Text {
            pos, anchor, text, ..
        }) => {
            assert_eq!(*pos, pos2(50.0, 4.0));
            assert_eq!(*anchor, Align2::LEFT_TOP);
            assert_eq!(text, FUNCTION_LABEL);
        }
        other => panic!("expected title, got {other:?}"),
    }
}

#[test]
fn line_mode_draws_segments_between_samples() {
    let scene = scene_for(&sample(&DEFAULT_AXIS), RenderMode::Line);
    assert_eq!(curve_lines(&scene).len(), 6);
    assert!(circles(&scene).is_empty());
    // frame + axes + 7 x ticks + 7 y ticks + 6 segments + title
    assert_eq!(scene.len(), 1 + 2 + 14 + 14 + 6 + 1);
}

#[test]
fn points_mode_draws_markers_with_labels() {
    let scene = scene_for(&sample(&DEFAULT_AXIS), RenderMode::Points);
    assert!(curve_lines(&scene).is_empty());

    let markers = circles(&scene);
    assert_eq!(markers.len(), 7);
    assert!(markers.iter().all(|(_, r)| *r == 3.0));

    let labels: Vec<&str> = texts(&scene)
        .into_iter()
        .filter(|t| t.starts_with("t="))
        .collect();
    assert_eq!(
        labels,
        vec!["t=0.2", "t=0.3", "t=0.4", "t=0.5", "t=0.6", "t=0.7", "t=0.8"]
    );
    assert_eq!(scene.len(), 1 + 2 + 14 + 14 + 14 + 1);
}

#[test]
fn extreme_samples_touch_plot_corners() {
    let scene = scene_for(&sample(&DEFAULT_AXIS), RenderMode::Points);
    let markers = circles(&scene);
    // t = 0.2 starts at the left edge.
    assert_abs_diff_eq!(markers[0].0.x, 50.0, epsilon = 1e-3);
    // t = 0.7 holds the maximum, drawn at the top.
    assert_abs_diff_eq!(markers[5].0.y, 30.0, epsilon = 1e-3);
    // t = 0.8 holds the minimum, drawn at the bottom right.
    assert_abs_diff_eq!(markers[6].0.x, 770.0, epsilon = 1e-3);
    assert_abs_diff_eq!(markers[6].0.y, 550.0, epsilon = 1e-3);
}

#[test]
fn render_mode_only_changes_curve_commands() {
    let series = sample(&DEFAULT_AXIS);
    let before = series.clone();
    let line = scene_for(&series, RenderMode::Line);
    let points = scene_for(&series, RenderMode::Points);
    assert_eq!(series, before);

    let shared = 1 + 2 + 14 + 14;
    assert_eq!(line.commands()[..shared], points.commands()[..shared]);
    assert_eq!(line.commands().last(), points.commands().last());
}

#[test]
fn y_labels_sit_left_of_plot() {
    let scene = scene_for(&sample(&DEFAULT_AXIS), RenderMode::Line);
    let y_labels: Vec<_> = scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { pos, anchor, .. } if *anchor == Align2::RIGHT_CENTER => Some(*pos),
            _ => None,
        })
        .collect();
    assert_eq!(y_labels.len(), 7);
    assert!(y_labels.iter().all(|p| p.x == 44.0));
    assert_eq!(y_labels[0].y, 550.0);
    assert_eq!(y_labels[6].y, 30.0);
}

#[test]
fn empty_series_keeps_frame_and_title() {
    let axis = AxisConfig::new(0.2, 0.8, 0.1).unwrap();
    let series = sample_with(&axis, |_| None);
    let scene = scene_for(&series, RenderMode::Line);
    assert_eq!(scene.len(), 4);
    assert_eq!(texts(&scene), vec![FUNCTION_LABEL]);
}

#[test]
fn scene_paints_commands_in_order() {
    let scene = scene_for(&sample(&DEFAULT_AXIS), RenderMode::Points);
    let mut recorded = Scene::default();
    scene.paint(&mut recorded);
    assert_eq!(recorded, scene);
}

#[test]
fn layout_offset_moves_everything() {
    let canvas = Rect::from_min_size(pos2(10.0, 40.0), vec2(800.0, 600.0));
    let layout = PlotLayout::new(canvas, &PlotMargins::default()).unwrap();
    let series = sample(&DEFAULT_AXIS);
    let scene = build_scene(
        &series,
        PlotRange::from_series(&series).as_ref(),
        &DEFAULT_AXIS,
        &layout,
        RenderMode::Line,
        &PlotStyle::default(),
    );
    match scene.commands().last() {
        Some(DrawCommand::Text { pos, .. }) => assert_eq!(*pos, pos2(60.0, 44.0)),
        other => panic!("expected title, got {other:?}"),
    }
}

#[test]
fn supplied_range_drives_y_labels() {
    let layout = PlotLayout::new(canvas(), &PlotMargins::default()).unwrap();
    let series = sample(&DEFAULT_AXIS);
    let range = PlotRange { min: -12.0, max: 12.0 };
    let scene = build_scene(
        &series,
        Some(&range),
        &DEFAULT_AXIS,
        &layout,
        RenderMode::Line,
        &PlotStyle::default(),
    );
    let y_labels: Vec<&str> = scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, anchor, .. } if *anchor == Align2::RIGHT_CENTER => {
                Some(text.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(y_labels, vec!["-12", "-8", "-4", "0", "4", "8", "12"]);
}

#[test]
fn missing_range_skips_curve_and_y_grid() {
    let layout = PlotLayout::new(canvas(), &PlotMargins::default()).unwrap();
    let series = sample(&DEFAULT_AXIS);
    let scene = build_scene(
        &series,
        None,
        &DEFAULT_AXIS,
        &layout,
        RenderMode::Line,
        &PlotStyle::default(),
    );
    assert!(curve_lines(&scene).is_empty());
    assert!(!scene
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Text { anchor, .. } if *anchor == Align2::RIGHT_CENTER)));
}
