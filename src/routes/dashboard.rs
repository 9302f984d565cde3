use axum::{extract::State, Json};
use serde::Deserialize;

use crate::common::AppState;
use crate::dashboard::{ChartView, DashboardStatus};
use crate::error::{AppError, AppResult};
use crate::host::RenderedChart;

#[derive(Debug, Deserialize)]
pub struct MountSurfacesRequest {
    /// Chart views whose canvas the page has created
    pub surfaces: Vec<MountedSurface>,
}

#[derive(Debug, Deserialize)]
pub struct MountedSurface {
    pub view: String,
    pub element_id: String,
}

/// Current dashboard status.
pub async fn get_status(State(state): State<AppState>) -> Json<DashboardStatus> {
    Json(state.dashboard.lock().await.status())
}

/// Chart documents from the single render pass.
pub async fn get_charts(State(state): State<AppState>) -> AppResult<Json<Vec<RenderedChart>>> {
    let dashboard = state.dashboard.lock().await;

    match dashboard.status() {
        DashboardStatus::Rendered { .. } => Ok(Json(
            dashboard
                .charts()
                .iter()
                .map(|(_, chart)| chart.clone())
                .collect(),
        )),
        DashboardStatus::FetchFailed { error } => Err(AppError::Backend(error)),
        DashboardStatus::Waiting {
            has_data,
            surfaces_ready,
        } => Err(AppError::ServiceUnavailable(format!(
            "Dashboard not rendered yet (has_data: {has_data}, surfaces_ready: {surfaces_ready})"
        ))),
        DashboardStatus::RenderFailed { error } => Err(dashboard
            .render_error()
            .cloned()
            .map_or(AppError::Internal(error), AppError::Render)),
    }
}

/// Register canvases mounted by the page. Once all six exist, the
/// surfaces-ready signal fires.
pub async fn mount_surfaces(
    State(state): State<AppState>,
    Json(request): Json<MountSurfacesRequest>,
) -> AppResult<Json<DashboardStatus>> {
    // Validate the whole batch before touching the registry
    let surfaces = request
        .surfaces
        .into_iter()
        .map(|s| {
            let view = ChartView::parse(&s.view)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown chart surface '{}'", s.view)))?;
            if s.element_id.trim().is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Surface '{}' has no element id",
                    s.view
                )));
            }
            Ok((view, s.element_id))
        })
        .collect::<AppResult<Vec<_>>>()?;

    let mut dashboard = state.dashboard.lock().await;
    for (view, element_id) in surfaces {
        dashboard.surfaces_mut().mount(view, element_id);
    }

    if dashboard.surfaces().is_complete() {
        dashboard.notify_surfaces_ready();
    } else {
        tracing::debug!(missing = ?dashboard.surfaces().missing(), "surfaces_pending");
    }

    Ok(Json(dashboard.status()))
}
