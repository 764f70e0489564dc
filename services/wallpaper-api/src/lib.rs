//! Wallpaper HTTP service.
//!
//! Serves progress wallpapers as PNG on `GET /api/wallpaper` (also `/wallpaper`),
//! plus `/health` and Prometheus `/metrics`.

pub mod clock;
pub mod config;
pub mod handlers;
pub mod metrics;
pub mod quotes;
pub mod state;

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::ServiceConfig;
pub use state::AppState;

/// Build the service router.
pub fn build_router(state: Arc<AppState>, prometheus_handle: PrometheusHandle) -> Router {
    Router::new()
        // Wallpaper
        .route("/api/wallpaper", get(handlers::wallpaper_handler))
        .route("/wallpaper", get(handlers::wallpaper_handler))
        // Health check
        .route("/health", get(handlers::health_handler))
        // Metrics
        .route("/metrics", get(handlers::metrics_handler))
        .layer(Extension(state))
        .layer(Extension(prometheus_handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
