//! Readiness gate and render pass behaviour of the dashboard aggregator.
//!
//! Run with: cargo test --test aggregator_test

mod common;

use common::{dashboard, reading, FakeSurfaces, RecordingRenderer, StaticFetcher};
use sensor_dashboard::backend::SampleFetcher;
use sensor_dashboard::dashboard::{
    ChartView, DashboardAggregator, DashboardStatus, RenderError, TimeLabeler,
};
use sensor_dashboard::error::AppError;

#[test]
fn renders_once_when_data_arrives_first() {
    let mut dash = dashboard(FakeSurfaces::all());

    assert!(!dash.accept_fetch(Ok(vec![reading(0, Some("LOW"))])));
    assert!(dash.renderer().created.is_empty());

    assert!(dash.notify_surfaces_ready());
    assert_eq!(dash.renderer().created.len(), 6);
    assert_eq!(dash.status(), DashboardStatus::Rendered { charts: 6 });
}

#[test]
fn renders_on_data_arrival_when_surfaces_come_first() {
    let mut dash = dashboard(FakeSurfaces::all());

    assert!(!dash.notify_surfaces_ready());
    assert!(dash.renderer().created.is_empty());
    assert_eq!(
        dash.status(),
        DashboardStatus::Waiting {
            has_data: false,
            surfaces_ready: true
        }
    );

    assert!(dash.accept_fetch(Ok(vec![reading(0, None), reading(60, None)])));
    assert_eq!(dash.renderer().created.len(), 6);
}

#[test]
fn further_triggers_are_no_ops() {
    let mut dash = dashboard(FakeSurfaces::all());
    dash.accept_fetch(Ok(vec![reading(0, Some("HIGH"))]));
    assert!(dash.notify_surfaces_ready());

    assert!(!dash.attempt_render());
    assert!(!dash.notify_surfaces_ready());
    assert!(!dash.accept_fetch(Ok(vec![reading(120, Some("LOW"))])));
    assert!(!dash.accept_fetch(Err(AppError::Backend("HTTP 500".to_string()))));

    assert_eq!(dash.renderer().created.len(), 6);
    assert_eq!(dash.charts().len(), 6);
    assert_eq!(dash.status(), DashboardStatus::Rendered { charts: 6 });

    // The readings still match what the charts were drawn from
    let times: Vec<_> = dash.readings().iter().map(|r| r.timestamp).collect();
    assert_eq!(times, vec![common::at(0)]);
}

#[test]
fn empty_fetch_never_renders() {
    let mut dash = dashboard(FakeSurfaces::all());

    assert!(!dash.notify_surfaces_ready());
    assert!(!dash.accept_fetch(Ok(vec![])));
    assert!(!dash.attempt_render());

    assert!(dash.renderer().created.is_empty());
    assert_eq!(
        dash.status(),
        DashboardStatus::Waiting {
            has_data: false,
            surfaces_ready: true
        }
    );
}

#[test]
fn missing_surface_holds_render_until_it_exists() {
    let mut dash = dashboard(FakeSurfaces {
        available: ChartView::ALL[..5].to_vec(),
    });
    dash.accept_fetch(Ok(vec![reading(0, None)]));

    assert!(!dash.notify_surfaces_ready());
    assert!(dash.renderer().created.is_empty());
    assert!(!dash.is_rendered());

    dash.surfaces_mut().available.push(ChartView::TempSmokeCompare);
    assert!(dash.attempt_render());
    assert_eq!(dash.renderer().created.len(), 6);
}

#[test]
fn fetch_failure_is_observable_and_does_not_render() {
    let mut dash = dashboard(FakeSurfaces::all());
    dash.notify_surfaces_ready();

    assert!(!dash.accept_fetch(Err(AppError::Backend("HTTP 500".to_string()))));

    assert!(dash.renderer().created.is_empty());
    match dash.status() {
        DashboardStatus::FetchFailed { error } => assert!(error.contains("HTTP 500")),
        other => panic!("unexpected status {other:?}"),
    }
}

#[test]
fn renderer_failure_stops_the_pass_for_good() {
    let renderer = RecordingRenderer {
        reject: Some(ChartView::Light),
        ..RecordingRenderer::default()
    };
    let mut dash = DashboardAggregator::new(FakeSurfaces::all(), renderer, TimeLabeler::default());
    dash.accept_fetch(Ok(vec![reading(0, None)]));

    assert!(dash.notify_surfaces_ready());

    // Temperature, smoke and distance come before light
    assert_eq!(dash.charts().len(), 3);
    assert!(matches!(
        dash.render_error(),
        Some(RenderError::InvalidSurface(view)) if view == "light"
    ));
    assert!(matches!(dash.status(), DashboardStatus::RenderFailed { .. }));

    assert!(!dash.attempt_render());
    assert_eq!(dash.renderer().created.len(), 3);
}

#[tokio::test]
async fn fetched_readings_are_requested_by_count_and_sorted() {
    let fetcher = StaticFetcher::ok(vec![
        reading(120, Some("HIGH")),
        reading(60, Some("LOW")),
        reading(0, Some("MEDIUM")),
    ]);
    let mut dash = dashboard(FakeSurfaces::all());
    dash.notify_surfaces_ready();

    assert!(dash.accept_fetch(fetcher.fetch_recent(20).await));

    assert_eq!(*fetcher.requested.lock().unwrap(), vec![20]);
    let times: Vec<_> = dash.readings().iter().map(|r| r.timestamp).collect();
    assert_eq!(times, vec![common::at(0), common::at(60), common::at(120)]);
}

#[tokio::test]
async fn failed_fetch_leaves_dashboard_unrendered() {
    let fetcher = StaticFetcher::failing("connection refused");
    let mut dash = dashboard(FakeSurfaces::all());
    dash.notify_surfaces_ready();

    assert!(!dash.accept_fetch(fetcher.fetch_recent(20).await));
    assert!(!dash.is_rendered());
    assert!(matches!(dash.status(), DashboardStatus::FetchFailed { .. }));
}
