//! Rendering: turning a sampled series into draw commands.
//!
//! The plot is described as a [`Scene`], an ordered list of [`DrawCommand`]s
//! built by [`build_scene`]. A scene knows nothing about the window; any
//! [`Canvas`] can replay it. [`EguiCanvas`] is the one the app uses.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`layout`]        | Plot rectangle and the `(t, y)` to screen transform |
//! | [`scene`]         | Scene builder: background, axes, ticks, curve, title |
//! | [`style`]         | Colours, strokes and text sizes |
//! | [`egui_canvas`]   | [`Canvas`] backed by an `egui::Painter` |

pub mod egui_canvas;
pub mod layout;
pub mod scene;
pub mod style;

pub use egui_canvas::EguiCanvas;
pub use layout::{PlotLayout, PlotMargins, PlotTransform};
pub use scene::build_scene;
pub use style::PlotStyle;

use eframe::egui::{Align2, Color32, Pos2, Rect, Stroke};

/// A 2D drawing surface accepting the primitives a [`Scene`] is made of.
pub trait Canvas {
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);
    fn circle_filled(&mut self, center: Pos2, radius: f32, fill: Color32);
    /// Draw `text` so that its `anchor` point sits at `pos`.
    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32);
    fn rect_filled(&mut self, rect: Rect, fill: Color32);
}

/// One drawing primitive in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
    },
    Rect {
        rect: Rect,
        fill: Color32,
    },
}

/// Ordered draw commands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every command, in order, onto `canvas`.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            match command {
                DrawCommand::Line { from, to, stroke } => canvas.line(*from, *to, *stroke),
                DrawCommand::Circle {
                    center,
                    radius,
                    fill,
                } => canvas.circle_filled(*center, *radius, *fill),
                DrawCommand::Text {
                    pos,
                    anchor,
                    text,
                    size,
                    color,
                } => canvas.text(*pos, *anchor, text, *size, *color),
                DrawCommand::Rect { rect, fill } => canvas.rect_filled(*rect, *fill),
            }
        }
    }
}

/// A scene is itself a canvas that records what is drawn on it.
impl Canvas for Scene {
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.push(DrawCommand::Line { from, to, stroke });
    }

    fn circle_filled(&mut self, center: Pos2, radius: f32, fill: Color32) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            fill,
        });
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32) {
        self.push(DrawCommand::Text {
            pos,
            anchor,
            text: text.to_string(),
            size,
            color,
        });
    }

    fn rect_filled(&mut self, rect: Rect, fill: Color32) {
        self.push(DrawCommand::Rect { rect, fill });
    }
}
