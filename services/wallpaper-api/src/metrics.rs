//! Prometheus metrics for the wallpaper service.
//!
//! Recorded through the `metrics` facade; the recorder installed in `main`
//! exposes them on `GET /metrics`.

use std::time::Duration;

use metrics::{counter, histogram};
use wallpaper_common::ViewKind;

pub const REQUESTS_TOTAL: &str = "wallpaper_requests_total";
pub const RENDER_FAILURES_TOTAL: &str = "wallpaper_render_failures_total";
pub const RENDER_DURATION_MS: &str = "wallpaper_render_duration_ms";
pub const QUOTE_FETCH_TOTAL: &str = "quote_fetch_total";

/// Where a daily quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteOrigin {
    Cache,
    Remote,
    Fallback,
}

impl QuoteOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteOrigin::Cache => "cache",
            QuoteOrigin::Remote => "remote",
            QuoteOrigin::Fallback => "fallback",
        }
    }
}

pub fn record_request(view: ViewKind) {
    counter!(REQUESTS_TOTAL, "view" => view.as_str()).increment(1);
}

pub fn record_render(elapsed: Duration) {
    histogram!(RENDER_DURATION_MS).record(elapsed.as_secs_f64() * 1000.0);
}

pub fn record_render_failure() {
    counter!(RENDER_FAILURES_TOTAL).increment(1);
}

pub fn record_quote(origin: QuoteOrigin) {
    counter!(QUOTE_FETCH_TOTAL, "source" => origin.as_str()).increment(1);
}
