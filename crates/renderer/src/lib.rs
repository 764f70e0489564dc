//! Wallpaper rendering.
//!
//! Pipeline: period math and layout geometry feed the view composers, which
//! build a [`scene::Scene`]; the [`raster::Rasterizer`] turns it into PNG bytes.
//! - Color encodings for task completion
//! - Year/month/day progress
//! - Dot grid, ring and text layout
//! - SVG scene graph
//! - usvg/resvg rasterization and PNG encoding

pub mod color;
pub mod layout;
pub mod period;
pub mod png;
pub mod raster;
pub mod scene;
pub mod views;

use chrono::NaiveDateTime;
use wallpaper_common::{ViewKind, WallpaperResult};

pub use layout::Canvas;
pub use raster::{FontSet, Rasterizer};
pub use scene::Scene;
pub use views::{compose_view, DotEncoding, ProgressView, ViewData};

/// Compose and rasterize one wallpaper.
pub fn render_wallpaper(
    rasterizer: &Rasterizer,
    kind: ViewKind,
    data: &ViewData<'_>,
    now: NaiveDateTime,
    canvas: Canvas,
) -> WallpaperResult<Vec<u8>> {
    let scene = compose_view(kind, data, now, canvas);
    rasterizer.render_png(&scene)
}
