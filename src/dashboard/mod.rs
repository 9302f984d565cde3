//! Dashboard aggregation: readings in, one render pass of six charts out.

pub mod aggregator;
pub mod charts;
pub mod gate;
pub mod labels;
pub mod series;

pub use aggregator::{DashboardAggregator, DashboardStatus};
pub use charts::{ChartConfig, ChartData, ChartDefinition, ChartKind, ChartView};
pub use gate::ReadinessGate;
pub use labels::TimeLabeler;
pub use series::{Dimension, Series, SeriesSet, SmokeLevelCounts};

/// Host capability that hands out the drawing surface for each chart view.
pub trait SurfaceProvider {
    type Surface;

    /// `None` until the host has created the surface for `view`.
    fn surface(&self, view: ChartView) -> Option<Self::Surface>;
}

/// Turns chart data and configuration into a chart on an existing surface.
pub trait ChartRenderer<S> {
    type Handle;

    /// # Errors
    ///
    /// Returns `RenderError` if the surface is unusable or the chart is rejected.
    fn create_chart(
        &mut self,
        surface: &S,
        kind: ChartKind,
        data: &ChartData,
        config: &ChartConfig,
    ) -> Result<Self::Handle, RenderError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid surface: {0}")]
    InvalidSurface(String),

    #[error("chart rejected: {0}")]
    Rejected(String),
}
