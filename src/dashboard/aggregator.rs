use serde::Serialize;

use crate::backend::SensorReading;
use crate::dashboard::charts::{self, ChartView};
use crate::dashboard::gate::ReadinessGate;
use crate::dashboard::labels::TimeLabeler;
use crate::dashboard::series::SeriesSet;
use crate::dashboard::{ChartRenderer, RenderError, SurfaceProvider};
use crate::error::{AppError, AppResult};

/// Observable state of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardStatus {
    Waiting { has_data: bool, surfaces_ready: bool },
    FetchFailed { error: String },
    Rendered { charts: usize },
    RenderFailed { error: String },
}

/// Bridges the sample fetch and the host's surface lifecycle into a single
/// render pass.
///
/// Chart handles created by that pass are kept for the lifetime of the
/// aggregator and are never updated.
pub struct DashboardAggregator<P, R>
where
    P: SurfaceProvider,
    R: ChartRenderer<P::Surface>,
{
    surfaces: P,
    renderer: R,
    labeler: TimeLabeler,
    readings: Vec<SensorReading>,
    gate: ReadinessGate,
    charts: Vec<(ChartView, R::Handle)>,
    fetch_error: Option<String>,
    render_error: Option<RenderError>,
}

impl<P, R> DashboardAggregator<P, R>
where
    P: SurfaceProvider,
    R: ChartRenderer<P::Surface>,
{
    pub fn new(surfaces: P, renderer: R, labeler: TimeLabeler) -> Self {
        Self {
            surfaces,
            renderer,
            labeler,
            readings: Vec::new(),
            gate: ReadinessGate::new(),
            charts: Vec::new(),
            fetch_error: None,
            render_error: None,
        }
    }

    /// Data-available signal, fed with the result of
    /// [`SampleFetcher::fetch_recent`](crate::backend::SampleFetcher::fetch_recent).
    ///
    /// Successful results are stored oldest first and trigger a render attempt.
    /// A failed fetch leaves the stored readings untouched and only updates the
    /// status. Once rendered, the readings behind the charts are kept and later
    /// results are ignored. Returns whether this call performed the render pass.
    pub fn accept_fetch(&mut self, result: AppResult<Vec<SensorReading>>) -> bool {
        if self.gate.is_open() {
            tracing::debug!(ok = result.is_ok(), "Ignoring fetch result after render");
            return false;
        }

        match result {
            Ok(mut readings) => {
                // Stable, so equal timestamps keep their fetch order
                readings.sort_by_key(|r| r.timestamp);
                tracing::info!(count = readings.len(), "readings_loaded");

                self.fetch_error = None;
                self.gate.set_has_data(!readings.is_empty());
                self.readings = readings;
                self.attempt_render()
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch sensor readings");
                self.fetch_error = Some(match e {
                    AppError::Backend(msg) => msg,
                    other => other.to_string(),
                });
                false
            }
        }
    }

    /// Surfaces-available signal. Returns whether this call performed the render pass.
    pub fn notify_surfaces_ready(&mut self) -> bool {
        self.gate.mark_surfaces_ready();
        tracing::debug!("surfaces_ready");
        self.attempt_render()
    }

    /// Render all six charts if data is loaded, every surface resolves, and
    /// nothing has been rendered yet.
    ///
    /// Returns `true` only for the call that performed the render pass, even if
    /// the renderer rejected one of the charts.
    pub fn attempt_render(&mut self) -> bool {
        let surfaces = &self.surfaces;
        let Some(targets) = self.gate.try_open(|| {
            ChartView::ALL
                .into_iter()
                .map(|view| surfaces.surface(view).map(|surface| (view, surface)))
                .collect::<Option<Vec<_>>>()
        }) else {
            tracing::debug!(
                has_data = self.gate.has_data(),
                surfaces_ready = self.gate.surfaces_ready(),
                rendered = self.gate.is_open(),
                "render_skipped"
            );
            return false;
        };

        let series = SeriesSet::build(&self.readings, &self.labeler);
        let definitions = charts::build_charts(&series);

        for (definition, (view, surface)) in definitions.iter().zip(&targets) {
            debug_assert_eq!(definition.view, *view);
            match self.renderer.create_chart(
                surface,
                definition.kind,
                &definition.data,
                &definition.config,
            ) {
                Ok(handle) => self.charts.push((*view, handle)),
                Err(e) => {
                    tracing::error!(view = view.as_str(), error = %e, "Chart render failed");
                    self.render_error = Some(e);
                    return true;
                }
            }
        }

        tracing::info!(
            charts = self.charts.len(),
            points = series.labels.len(),
            low = series.smoke_levels.low,
            medium = series.smoke_levels.medium,
            high = series.smoke_levels.high,
            "dashboard_rendered"
        );
        true
    }

    #[must_use]
    pub fn status(&self) -> DashboardStatus {
        if let Some(e) = &self.render_error {
            return DashboardStatus::RenderFailed {
                error: e.to_string(),
            };
        }
        if self.gate.is_open() {
            return DashboardStatus::Rendered {
                charts: self.charts.len(),
            };
        }
        if let Some(error) = &self.fetch_error {
            return DashboardStatus::FetchFailed {
                error: error.clone(),
            };
        }
        DashboardStatus::Waiting {
            has_data: self.gate.has_data(),
            surfaces_ready: self.gate.surfaces_ready(),
        }
    }

    #[must_use]
    pub fn render_error(&self) -> Option<&RenderError> {
        self.render_error.as_ref()
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.gate.is_open()
    }

    /// Readings in chronological order.
    #[must_use]
    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    #[must_use]
    pub fn charts(&self) -> &[(ChartView, R::Handle)] {
        &self.charts
    }

    #[must_use]
    pub fn surfaces(&self) -> &P {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut P {
        &mut self.surfaces
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
