//! HTTP handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Timelike;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use tracing::{error, info, instrument};

use renderer::{render_wallpaper, Canvas, ViewData};
use todo_parser::{build_completion_map, load_day};
use wallpaper_common::{
    CategorizedTodos, Quote, TodoCompletionMap, ViewKind, WallpaperError, WallpaperResult,
};

use crate::clock::resolve_now;
use crate::metrics;
use crate::state::AppState;

pub const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Query parameters for `GET /api/wallpaper`.
///
/// Kept as raw strings so malformed numbers fall back instead of rejecting.
#[derive(Debug, Default, Deserialize)]
pub struct WallpaperQuery {
    pub width: Option<String>,
    pub height: Option<String>,
    pub view: Option<String>,
    pub tz: Option<String>,
}

/// Parse a dimension; unparsable or zero gives `default`, large values clamp to `max`.
pub fn parse_dimension(raw: Option<&str>, default: u32, max: u32) -> u32 {
    let value = raw
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default);
    value.min(max.max(1))
}

/// Everything a view needs, owned so it can cross into a blocking task.
#[derive(Default)]
struct ViewInputs {
    completions: Option<TodoCompletionMap>,
    tasks: Option<CategorizedTodos>,
    quote: Option<Quote>,
}

async fn gather_inputs(state: &AppState, kind: ViewKind, today: chrono::NaiveDate) -> ViewInputs {
    match kind {
        ViewKind::Yearly | ViewKind::Monthly => ViewInputs {
            completions: Some(build_completion_map(state.todos.as_ref()).await),
            ..Default::default()
        },
        ViewKind::Daily => {
            let tasks = load_day(state.todos.as_ref(), today)
                .await
                .map(|day| day.tasks)
                .filter(|tasks| !tasks.is_empty());
            ViewInputs {
                tasks,
                quote: Some(state.quotes.quote().await),
                ..Default::default()
            }
        }
    }
}

/// GET /api/wallpaper
#[instrument(skip(state))]
pub async fn wallpaper_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<WallpaperQuery>,
) -> Response {
    let render = &state.config.render;
    let width = parse_dimension(query.width.as_deref(), render.default_width, render.max_dimension);
    let height =
        parse_dimension(query.height.as_deref(), render.default_height, render.max_dimension);

    let now = resolve_now(query.tz.as_deref(), &render.default_timezone);
    let kind = ViewKind::select(query.view.as_deref(), now.minute());
    metrics::record_request(kind);

    let inputs = gather_inputs(&state, kind, now.date()).await;
    let encoding = render.dot_encoding;
    let rasterizer = state.rasterizer.clone();
    let started = Instant::now();

    let result: WallpaperResult<Vec<u8>> = tokio::task::spawn_blocking(move || {
        let data = ViewData {
            completions: inputs.completions.as_ref(),
            encoding,
            tasks: inputs.tasks.as_ref(),
            quote: inputs.quote.as_ref(),
        };
        render_wallpaper(&rasterizer, kind, &data, now, Canvas::new(width, height))
    })
    .await
    .unwrap_or_else(|e| Err(WallpaperError::InternalError(format!("render task: {}", e))));

    match result {
        Ok(png) => {
            metrics::record_render(started.elapsed());
            info!(
                view = %kind,
                width = width,
                height = height,
                bytes = png.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Wallpaper rendered"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "image/png"),
                    (header::CACHE_CONTROL, NO_CACHE),
                ],
                png,
            )
                .into_response()
        }
        Err(e) => {
            metrics::record_render_failure();
            error!(view = %kind, width = width, height = height, error = %e, "Error generating wallpaper");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error generating wallpaper").into_response()
        }
    }
}

/// GET /health
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /metrics - Prometheus text format
pub async fn metrics_handler(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}
