pub mod client;
pub mod models;

use std::future::Future;

pub use client::ApiClient;
pub use models::{SensorReading, SmokeLevel};

use crate::error::AppResult;

/// Source of recent sensor readings.
///
/// Implementations may return fewer than `count` readings and make no promise
/// about their order.
pub trait SampleFetcher {
    fn fetch_recent(
        &self,
        count: usize,
    ) -> impl Future<Output = AppResult<Vec<SensorReading>>> + Send;
}
