//! Top-level entry point for running the plot as a native window.
//!
//! [`run_graph`] builds a [`GraphApp`] from a [`GraphConfig`], opens a native
//! window and enters the eframe event loop.

use eframe::egui;
use tracing::{debug, info};

use crate::config::GraphConfig;
use crate::error::Result;

use super::GraphApp;

/// Launch the plot in a native window.
///
/// The call blocks until the window is closed.
pub fn run_graph(mut cfg: GraphConfig) -> Result<()> {
    let opts = native_options(&mut cfg);
    let app = GraphApp::new(&cfg);
    info!(title = %cfg.title, mode = %cfg.render_mode, "opening window");

    eframe::run_native(&cfg.title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}

/// Native options from `cfg`, filling in window size, minimum size and the
/// application icon where `cfg.native_options` leaves them unset.
pub fn native_options(cfg: &mut GraphConfig) -> eframe::NativeOptions {
    let mut opts = cfg.native_options.take().unwrap_or_default();

    // Try to set application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::Vec2::from(cfg.window.initial));
    }
    if opts.viewport.min_inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_min_inner_size(egui::Vec2::from(cfg.window.min));
    }
    opts
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    // Parse and render SVG to RGBA using usvg + resvg.
    let opt = usvg::Options::default();
    let tree = match usvg::Tree::from_data(&data, &opt) {
        Ok(tree) => tree,
        Err(e) => {
            debug!(error = %e, "could not parse icon.svg");
            return None;
        }
    };
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
