use curveplot::{run_graph, GraphConfig};
use tracing_subscriber::EnvFilter;

fn main() -> curveplot::Result<()> {
    // RUST_LOG=curveplot=debug shows sampling and mode changes.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run_graph(GraphConfig::default())
}
