//! The render path is the only failure a caller sees.
//!
//! Kept in its own test binary: it installs the global metrics recorder.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

use renderer::{FontSet, Rasterizer};
use test_utils::TodoDir;
use todo_parser::FsTodoStore;
use wallpaper_api::quotes::QuoteProvider;
use wallpaper_api::{build_router, AppState, ServiceConfig};

#[tokio::test]
async fn test_render_failure_is_500_and_counted() {
    let todos = TodoDir::new();
    let mut config = ServiceConfig::default();
    config.todos_dir = todos.path().to_path_buf();
    config.quotes.remote = false;
    config.render.default_width = 120;
    config.render.default_height = 240;

    // Any real canvas is over this limit.
    let rasterizer = Rasterizer::new(FontSet::empty("Inter")).with_pixel_limit(1);
    let state = AppState::with_parts(
        config,
        Arc::new(FsTodoStore::new(todos.path())),
        rasterizer,
        QuoteProvider::new(None, Duration::from_secs(60)),
    );
    let handle = PrometheusBuilder::new().install_recorder().unwrap();
    let router = build_router(Arc::new(state), handle);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/wallpaper?view=yearly")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    assert!(!content_type.starts_with("image/"), "got {}", content_type);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Error generating wallpaper");

    let response = router
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("wallpaper_render_failures_total 1"), "{}", text);
    assert!(text.contains("wallpaper_requests_total{view=\"yearly\"} 1"), "{}", text);
}
