//! Application module: the native window around the plot.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`graph_app`]   | [`GraphApp`] state and its [`eframe::App`] impl |
//! | [`layout`]      | Top bar with the Line / Points selector |
//! | [`run`]         | [`run_graph()`] entry point and icon loading |

mod graph_app;
mod layout;
mod run;

pub use graph_app::GraphApp;
pub use run::{native_options, run_graph};
