use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::dashboard::{DashboardAggregator, TimeLabeler};
use crate::host::{JsonChartRenderer, SurfaceRegistry};

pub type Dashboard = DashboardAggregator<SurfaceRegistry, JsonChartRenderer>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Every readiness signal and the render gate go through this one lock
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dashboard = DashboardAggregator::new(
            SurfaceRegistry::new(),
            JsonChartRenderer::new(),
            TimeLabeler::from_config(&config),
        );

        Self {
            config: Arc::new(config),
            dashboard: Arc::new(Mutex::new(dashboard)),
        }
    }
}
