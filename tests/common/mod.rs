#![allow(dead_code)]

use chrono::{DateTime, Utc};

use sensor_dashboard::backend::{SampleFetcher, SensorReading};
use sensor_dashboard::dashboard::{
    ChartConfig, ChartData, ChartKind, ChartRenderer, ChartView, DashboardAggregator,
    RenderError, SurfaceProvider, TimeLabeler,
};
use sensor_dashboard::error::{AppError, AppResult};

/// 2026-01-01T10:00:00Z
pub const BASE_TS: i64 = 1_767_261_600;

pub fn at(offset_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(BASE_TS + offset_secs, 0).unwrap()
}

pub fn reading(offset_secs: i64, level: Option<&str>) -> SensorReading {
    let n = offset_secs as f64;
    SensorReading {
        timestamp: at(offset_secs),
        temperature: 20.0 + n,
        smoke: 100.0 + n,
        distance: 50.0 - n,
        light: 300.0 + n,
        smoke_level: level.map(str::to_string),
    }
}

/// Surfaces for a fixed set of views.
pub struct FakeSurfaces {
    pub available: Vec<ChartView>,
}

impl FakeSurfaces {
    pub fn all() -> Self {
        Self {
            available: ChartView::ALL.to_vec(),
        }
    }

    pub fn none() -> Self {
        Self { available: vec![] }
    }
}

impl SurfaceProvider for FakeSurfaces {
    type Surface = ChartView;

    fn surface(&self, view: ChartView) -> Option<ChartView> {
        self.available.contains(&view).then_some(view)
    }
}

#[derive(Debug, Clone)]
pub struct RecordedChart {
    pub view: ChartView,
    pub kind: ChartKind,
    pub data: ChartData,
    pub config: ChartConfig,
}

/// Records every chart it is asked to create; optionally rejects one view.
#[derive(Default)]
pub struct RecordingRenderer {
    pub created: Vec<RecordedChart>,
    pub reject: Option<ChartView>,
}

impl ChartRenderer<ChartView> for RecordingRenderer {
    type Handle = usize;

    fn create_chart(
        &mut self,
        surface: &ChartView,
        kind: ChartKind,
        data: &ChartData,
        config: &ChartConfig,
    ) -> Result<usize, RenderError> {
        if self.reject == Some(*surface) {
            return Err(RenderError::InvalidSurface(surface.as_str().to_string()));
        }
        self.created.push(RecordedChart {
            view: *surface,
            kind,
            data: data.clone(),
            config: config.clone(),
        });
        Ok(self.created.len() - 1)
    }
}

pub type TestDashboard = DashboardAggregator<FakeSurfaces, RecordingRenderer>;

pub fn dashboard(surfaces: FakeSurfaces) -> TestDashboard {
    DashboardAggregator::new(surfaces, RecordingRenderer::default(), TimeLabeler::default())
}

/// Fetcher returning a canned result and remembering the requested count.
pub struct StaticFetcher {
    pub readings: Result<Vec<SensorReading>, String>,
    pub requested: std::sync::Mutex<Vec<usize>>,
}

impl StaticFetcher {
    pub fn ok(readings: Vec<SensorReading>) -> Self {
        Self {
            readings: Ok(readings),
            requested: std::sync::Mutex::new(vec![]),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            readings: Err(message.to_string()),
            requested: std::sync::Mutex::new(vec![]),
        }
    }
}

impl SampleFetcher for StaticFetcher {
    async fn fetch_recent(&self, count: usize) -> AppResult<Vec<SensorReading>> {
        self.requested.lock().unwrap().push(count);
        match &self.readings {
            Ok(readings) => Ok(readings.iter().take(count).cloned().collect()),
            Err(message) => Err(AppError::Backend(message.clone())),
        }
    }
}
