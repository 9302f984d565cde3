use reqwest::Client;
use std::time::Duration;

use crate::backend::SampleFetcher;
use crate::backend::models::SensorReading;
use crate::config::Config;
use crate::error::{AppError, AppResult};

pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the sensor backend configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> AppResult<Self> {
        Self::with_base_url(
            config.sensor_api_base_url.clone(),
            Duration::from_secs(config.fetch_timeout_seconds),
        )
    }

    /// # Errors
    ///
    /// Returns `AppError::Internal` if the underlying HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get the `count` most recent readings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Backend` if the request fails, returns an error status,
    /// or the body is not a JSON array of readings.
    pub async fn get_sensor_data(&self, count: usize) -> AppResult<Vec<SensorReading>> {
        let url = format!("{}/sensor-data?limit={count}", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Backend(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Backend(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Backend(format!("Failed to get response text: {e}")))?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse sensor-data response"
            );
            AppError::Backend(format!("Failed to parse response: {e}"))
        })
    }
}

impl SampleFetcher for ApiClient {
    async fn fetch_recent(&self, count: usize) -> AppResult<Vec<SensorReading>> {
        self.get_sensor_data(count).await
    }
}
