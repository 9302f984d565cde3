use crate::backend::SampleFetcher;
use crate::common::AppState;

/// Fetch the configured window of readings once and hand it to the dashboard.
///
/// The fetch runs outside the dashboard lock; only the hand-off is serialized.
/// Failures are recorded on the dashboard status and not retried.
pub async fn run_initial_load<F: SampleFetcher>(state: AppState, fetcher: F) {
    let count = state.config.sample_count;
    tracing::info!(count, "Fetching recent sensor readings");

    let result = fetcher.fetch_recent(count).await;

    let mut dashboard = state.dashboard.lock().await;
    if dashboard.accept_fetch(result) {
        tracing::info!("Dashboard rendered on data arrival");
    } else {
        tracing::debug!(status = ?dashboard.status(), "Dashboard waiting after data load");
    }
}
