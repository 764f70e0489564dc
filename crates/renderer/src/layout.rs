//! Geometry for the three views.
//!
//! Everything here is a pure function of canvas size and dates. Pixel
//! constants are authored against the 1179x2556 reference canvas and scaled
//! with [`Canvas::scale`]; grid and ring geometry is derived directly.

use chrono::{Datelike, NaiveDate};

pub const REFERENCE_WIDTH: f64 = 1179.0;
pub const REFERENCE_HEIGHT: f64 = 2556.0;

/// Gap between dots as a fraction of dot size.
pub const GAP_RATIO: f64 = 0.4;
/// Dot plus its trailing gap, in dot sizes.
pub const CELL_RATIO: f64 = 1.0 + GAP_RATIO;

pub const YEAR_COLUMNS_PORTRAIT: u32 = 14;
pub const YEAR_COLUMNS_LANDSCAPE: u32 = 26;
pub const WEEK_COLUMNS: u32 = 7;

/// Average glyph advance in em, used for wrapping.
pub const GLYPH_ADVANCE_EM: f64 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if height > width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn is_portrait(&self) -> bool {
        matches!(self, Orientation::Portrait)
    }
}

/// Output dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width, self.height)
    }

    pub fn scale(&self) -> f64 {
        (self.width as f64 / REFERENCE_WIDTH).min(self.height as f64 / REFERENCE_HEIGHT)
    }

    /// Scale a reference-canvas length.
    pub fn px(&self, reference: f64) -> f64 {
        reference * self.scale()
    }

    pub fn center_x(&self) -> f64 {
        self.width as f64 / 2.0
    }

    pub fn w(&self) -> f64 {
        self.width as f64
    }

    pub fn h(&self) -> f64 {
        self.height as f64
    }

    /// Baseline of the "% OF ... PASSED" footer.
    pub fn footer_baseline(&self) -> f64 {
        self.h() - self.px(100.0)
    }
}

/// A grid of equally sized round cells filled row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotGrid {
    pub columns: u32,
    pub rows: u32,
    pub dot_size: u32,
    pub gap: u32,
    /// Occupied cells, including leading padding.
    pub cells: u32,
}

impl DotGrid {
    /// Dots are at least one pixel. On a canvas too small to give every cell
    /// a pixel (both bounds floor to zero) the grid is wider than its box.
    fn new(columns: u32, cells: u32, dot_size: u32) -> Self {
        let columns = columns.max(1);
        let dot_size = dot_size.max(1);
        Self {
            columns,
            rows: cells.div_ceil(columns),
            dot_size,
            gap: (dot_size as f64 * GAP_RATIO).floor() as u32,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.columns * self.dot_size + self.columns.saturating_sub(1) * self.gap
    }

    pub fn height(&self) -> u32 {
        self.rows * self.dot_size + self.rows.saturating_sub(1) * self.gap
    }

    /// Distance between consecutive cell origins.
    pub fn pitch(&self) -> u32 {
        self.dot_size + self.gap
    }

    /// Top-left of cell `index`, relative to the grid origin.
    pub fn cell_origin(&self, index: u32) -> (u32, u32) {
        let col = index % self.columns;
        let row = index / self.columns;
        (col * self.pitch(), row * self.pitch())
    }

    /// Center of cell `index`, relative to the grid origin.
    pub fn cell_center(&self, index: u32) -> (f64, f64) {
        let (x, y) = self.cell_origin(index);
        let half = self.dot_size as f64 / 2.0;
        (x as f64 + half, y as f64 + half)
    }
}

/// Year grid: one cell per day, 14 columns portrait or 26 landscape.
///
/// Dot size is the smallest of the height bound, the width bound and the
/// orientation cap, so the grid never overflows either axis once each bound
/// allows at least a one-pixel dot.
pub fn year_grid(canvas: Canvas, day_count: u32) -> DotGrid {
    let portrait = canvas.orientation().is_portrait();
    let columns = if portrait {
        YEAR_COLUMNS_PORTRAIT
    } else {
        YEAR_COLUMNS_LANDSCAPE
    };
    let rows = day_count.div_ceil(columns).max(1);

    let (max_width, max_height, cap) = if portrait {
        (canvas.w() * 0.95, canvas.h() * 0.58, 70)
    } else {
        (canvas.w() * 0.85, canvas.h() * 0.55, 50)
    };

    let from_height = (max_height / (rows as f64 * CELL_RATIO)).floor() as u32;
    let from_width = (max_width / (columns as f64 * CELL_RATIO)).floor() as u32;
    let dot_size = from_height.min(from_width).min(cap);

    DotGrid::new(columns, day_count, dot_size)
}

/// Top of the year grid, below the lock-screen clock.
pub fn year_top_padding(canvas: Canvas) -> f64 {
    canvas.h() * 0.32
}

/// Month grid: 7 week columns; `cells` includes the leading padding.
pub fn month_grid(canvas: Canvas, cells: u32) -> DotGrid {
    let columns = WEEK_COLUMNS as f64;
    let from_width = ((canvas.w() * 0.75) / (columns + (columns - 1.0) * GAP_RATIO)).floor() as u32;
    // Six week rows plus the header row inside 40% of the height.
    let from_height = ((canvas.h() * 0.4) / (7.0 * CELL_RATIO)).floor() as u32;

    DotGrid::new(WEEK_COLUMNS, cells, from_width.min(from_height))
}

pub fn month_top_padding(canvas: Canvas) -> f64 {
    canvas.h() * 0.25
}

/// Empty cells before the 1st in a Monday-first week.
pub fn month_padding(first_of_month: NaiveDate) -> u32 {
    (first_of_month.weekday().num_days_from_sunday() + 6) % 7
}

/// Circular day-progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub size: u32,
    pub stroke_width: u32,
    pub radius: f64,
    pub circumference: f64,
}

impl RingGeometry {
    pub fn for_canvas(canvas: Canvas, with_tasks: bool) -> Self {
        let k = if with_tasks { 0.5 } else { 0.6 };
        let size = ((canvas.w() * k).floor() as u32)
            .min((canvas.h() * 0.3).floor() as u32)
            .min(500)
            .max(1);
        let stroke_width = (size as f64 * 0.08).floor() as u32;
        let radius = (size as f64 - stroke_width as f64) / 2.0;
        Self {
            size,
            stroke_width,
            radius,
            circumference: 2.0 * std::f64::consts::PI * radius,
        }
    }

    /// Dash offset leaving `percentage` of the circumference visible.
    pub fn dash_offset(&self, percentage: f64) -> f64 {
        let p = (percentage / 100.0).clamp(0.0, 1.0);
        self.circumference * (1.0 - p)
    }
}

pub fn day_top_padding(canvas: Canvas) -> f64 {
    canvas.h() * 0.32
}

/// Task card width: narrower on wide canvases.
pub fn card_width(canvas: Canvas) -> f64 {
    if canvas.w() / canvas.h() > 0.7 {
        canvas.w() * 0.6
    } else {
        canvas.w() * 0.85
    }
}

/// Estimated rendered width of `text` at `font_size`.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_ADVANCE_EM
}

/// Greedy word wrap against the estimated glyph advance.
///
/// Words longer than a line are kept whole on their own line.
pub fn wrap_text(text: &str, font_size: f64, max_width: f64) -> Vec<String> {
    let max_chars = ((max_width / (font_size * GLYPH_ADVANCE_EM)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Keep at most `max_lines`, marking the cut with an ellipsis.
pub fn truncate_lines(mut lines: Vec<String>, max_lines: usize) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        last.push('\u{2026}');
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_grid_extent() {
        let grid = DotGrid::new(7, 35, 10);
        assert_eq!(grid.gap, 4);
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.width(), 7 * 10 + 6 * 4);
        assert_eq!(grid.height(), 5 * 10 + 4 * 4);
        assert_eq!(grid.cell_origin(8), (14, 14));
        assert_eq!(grid.cell_center(0), (5.0, 5.0));
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10.0, 56.0);
        // 10 chars per line
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(wrap_text("", 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_truncate_lines() {
        let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(truncate_lines(lines.clone(), 5).len(), 3);
        assert_eq!(truncate_lines(lines, 2), vec!["a", "b\u{2026}"]);
    }
}
