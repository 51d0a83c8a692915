//! How the sampled curve is drawn.

/// Curve presentation selected in the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Segments between consecutive samples.
    #[default]
    Line,
    /// A filled marker at every sample.
    Points,
}

impl RenderMode {
    /// All modes, in selector order.
    pub fn all() -> &'static [RenderMode] {
        &[RenderMode::Line, RenderMode::Points]
    }

    /// Text shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            RenderMode::Line => "Line",
            RenderMode::Points => "Points",
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
