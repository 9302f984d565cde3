//! In-process host for the dashboard: mounted surfaces and a renderer that
//! emits Chart.js chart documents for the browser to draw.

pub mod renderer;
pub mod surfaces;

pub use renderer::{JsonChartRenderer, RenderedChart};
pub use surfaces::{CanvasSurface, SurfaceRegistry};
