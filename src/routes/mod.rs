pub mod dashboard;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::common::AppState;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/dashboard", get(dashboard::get_status))
        .route("/charts", get(dashboard::get_charts))
        .route("/surfaces", post(dashboard::mount_surfaces))
        .layer(RequestBodyLimitLayer::new(64 * 1024)); // 64KB body limit

    // Health check routes
    let health_routes = Router::new().route("/healthz", get(health::healthz));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
