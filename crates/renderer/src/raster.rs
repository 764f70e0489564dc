//! Rasterization of composed scenes via usvg/resvg.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use usvg::fontdb;
use wallpaper_common::{WallpaperError, WallpaperResult};

use crate::png::encode_png;
use crate::scene::Scene;

/// Font faces available to text runs, plus the family scenes ask for.
#[derive(Clone)]
pub struct FontSet {
    db: Arc<fontdb::Database>,
    family: String,
}

impl FontSet {
    /// Load `.ttf`/`.otf` faces from `dir`, falling back to system fonts.
    ///
    /// Fails only when no face can be found at all.
    pub fn load(dir: &Path, family: &str) -> WallpaperResult<Self> {
        let mut db = fontdb::Database::new();
        if dir.is_dir() {
            db.load_fonts_dir(dir);
        } else {
            warn!(dir = %dir.display(), "Font directory not found");
        }

        if db.is_empty() {
            warn!(dir = %dir.display(), "No bundled fonts, falling back to system fonts");
            db.load_system_fonts();
        }
        if db.is_empty() {
            return Err(WallpaperError::FontError(format!(
                "no font faces in {} or on the system",
                dir.display()
            )));
        }

        let has_bold = db.faces().any(|f| f.weight == fontdb::Weight::BOLD);
        if !has_bold {
            warn!(family = family, "No bold face loaded, bold text will be synthesized");
        }
        db.set_sans_serif_family(family);
        info!(faces = db.len(), family = family, "Fonts loaded");

        Ok(Self {
            db: Arc::new(db),
            family: family.to_string(),
        })
    }

    /// No faces: text runs are dropped, shapes still render.
    pub fn empty(family: &str) -> Self {
        Self {
            db: Arc::new(fontdb::Database::new()),
            family: family.to_string(),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }
}

/// Largest pixmap the rasterizer will allocate.
pub const DEFAULT_MAX_PIXELS: u64 = 4096 * 4096;

/// Turns scenes into pixels and PNG bytes. Cheap to clone and share.
#[derive(Clone)]
pub struct Rasterizer {
    fonts: FontSet,
    max_pixels: u64,
}

impl Rasterizer {
    pub fn new(fonts: FontSet) -> Self {
        Self {
            fonts,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }

    /// Refuse scenes with more than `max_pixels` pixels.
    pub fn with_pixel_limit(mut self, max_pixels: u64) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Straight RGBA pixels, row-major.
    pub fn render_rgba(&self, scene: &Scene) -> WallpaperResult<Vec<u8>> {
        let pixels = scene.width as u64 * scene.height as u64;
        if pixels > self.max_pixels {
            return Err(WallpaperError::RenderError(format!(
                "{}x{} exceeds the {} pixel limit",
                scene.width, scene.height, self.max_pixels
            )));
        }

        let start = Instant::now();
        let svg = scene.to_svg(&self.fonts.family);

        let mut opt = usvg::Options::default();
        opt.font_family = self.fonts.family.clone();
        opt.fontdb = self.fonts.db.clone();

        let tree = usvg::Tree::from_str(&svg, &opt)
            .map_err(|e| WallpaperError::RenderError(format!("SVG parse failed: {}", e)))?;

        let mut pixmap = tiny_skia::Pixmap::new(scene.width, scene.height).ok_or_else(|| {
            WallpaperError::RenderError(format!(
                "cannot allocate {}x{} pixmap",
                scene.width, scene.height
            ))
        })?;
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
        for pixel in pixmap.pixels() {
            let c = pixel.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        debug!(
            width = scene.width,
            height = scene.height,
            primitives = scene.primitive_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Scene rasterized"
        );
        Ok(rgba)
    }

    pub fn render_png(&self, scene: &Scene) -> WallpaperResult<Vec<u8>> {
        let rgba = self.render_rgba(scene)?;
        encode_png(&rgba, scene.width, scene.height)
    }
}
