//! Tests for period math and layout geometry.
//!
//! Covers:
//! - Year/month/day progress percentages and formatting
//! - Year grid column choice and the triple-min dot size
//! - Monday-first month padding
//! - Day ring sizing and dash offset

use chrono::NaiveDate;
use renderer::layout::{self, card_width, Canvas, Orientation, RingGeometry};
use renderer::period::{days_in_year, Period};
use test_utils::{assert_approx_eq, datetime, leap_day_sample, size};

fn canvas((w, h): (u32, u32)) -> Canvas {
    Canvas::new(w, h)
}

// ============================================================================
// Period progress
// ============================================================================

#[test]
fn test_year_progress_leap_year_sample() {
    let now = leap_day_sample().and_hms_opt(9, 30, 0).unwrap();
    let progress = Period::Year.progress(now);

    assert_eq!(progress.elapsed, 167);
    assert_eq!(progress.total, 366);
    assert_eq!(progress.remaining(), 199);
    assert_eq!(progress.formatted(), "45.63");
}

#[test]
fn test_year_progress_ignores_time_of_day() {
    let morning = Period::Year.progress(datetime(2024, 6, 15, 0, 0));
    let night = Period::Year.progress(datetime(2024, 6, 15, 23, 59));
    assert_eq!(morning, night);
}

#[test]
fn test_year_progress_bounds() {
    let first = Period::Year.progress(datetime(2023, 1, 1, 12, 0));
    assert_eq!(first.elapsed, 1);
    assert_eq!(first.remaining(), 364);

    let last = Period::Year.progress(datetime(2023, 12, 31, 12, 0));
    assert_eq!(last.remaining(), 0);
    assert_eq!(last.formatted(), "100.00");
}

#[test]
fn test_month_progress_counts_days() {
    let progress = Period::Month.progress(datetime(2024, 6, 15, 18, 0));
    assert_eq!(progress.total, 30);
    assert_eq!(progress.formatted(), "50.00");

    let feb = Period::Month.progress(datetime(2024, 2, 29, 1, 0));
    assert_eq!(feb.total, 29);
    assert_eq!(feb.formatted(), "100.00");
}

#[test]
fn test_day_progress_at_six_pm() {
    let progress = Period::Day.progress(datetime(2024, 6, 15, 18, 0));
    assert_eq!(progress.elapsed, 64_800);
    assert_eq!(progress.formatted(), "75.00");
    assert_eq!(progress.whole_percent(), 75);
}

#[test]
fn test_day_progress_midnight_is_zero() {
    let progress = Period::Day.progress(datetime(2024, 6, 15, 0, 0));
    assert_eq!(progress.formatted(), "0.00");
}

// ============================================================================
// Year grid
// ============================================================================

#[test]
fn test_year_grid_columns_follow_orientation() {
    let landscape = layout::year_grid(canvas(size::SMALL_LANDSCAPE), 366);
    assert_eq!(landscape.columns, 26);
    assert_eq!(landscape.rows, 15);

    let portrait = layout::year_grid(Canvas::new(600, 1200), 366);
    assert_eq!(portrait.columns, 14);
    assert_eq!(portrait.rows, 27);
}

#[test]
fn test_square_canvas_is_landscape() {
    assert_eq!(Orientation::of(1000, 1000), Orientation::Landscape);
    assert_eq!(layout::year_grid(Canvas::new(1000, 1000), 365).columns, 26);
}

#[test]
fn test_year_grid_phone_dot_size() {
    let grid = layout::year_grid(canvas(size::PHONE), 366);
    // Height bound wins: floor(2556 * 0.58 / (27 * 1.4)) = 39
    assert_eq!(grid.dot_size, 39);
    assert_eq!(grid.gap, 15);
    assert_eq!(grid.width(), 14 * 39 + 13 * 15);
}

#[test]
fn test_year_grid_respects_cap() {
    let grid = layout::year_grid(Canvas::new(4000, 20000), 365);
    assert_eq!(grid.dot_size, 70);
    let grid = layout::year_grid(Canvas::new(8000, 6000), 365);
    assert_eq!(grid.dot_size, 50);
}

#[test]
fn test_year_grid_never_overflows() {
    let sizes = [
        size::PHONE,
        size::TABLET_LANDSCAPE,
        size::SMALL_PORTRAIT,
        size::SMALL_LANDSCAPE,
        (1290, 2796),
        (2048, 2732),
        (1920, 1080),
    ];
    for (w, h) in sizes {
        let c = Canvas::new(w, h);
        let (max_w, max_h) = if c.orientation().is_portrait() {
            (w as f64 * 0.95, h as f64 * 0.58)
        } else {
            (w as f64 * 0.85, h as f64 * 0.55)
        };
        for days in [365, 366] {
            let grid = layout::year_grid(c, days);
            assert!(grid.width() as f64 <= max_w, "{}x{} width overflow", w, h);
            assert!(grid.height() as f64 <= max_h, "{}x{} height overflow", w, h);
            assert!(grid.rows * grid.columns >= days);
        }
    }
}

#[test]
fn test_year_grid_degenerate_canvas_keeps_one_pixel_dots() {
    // 20x20 is landscape: 26 columns cannot fit in 17 px.
    let grid = layout::year_grid(Canvas::new(20, 20), 366);
    assert_eq!(grid.columns, 26);
    assert_eq!(grid.dot_size, 1);
    assert_eq!(grid.gap, 0);
    assert_eq!(grid.pitch(), 1);
    assert_eq!(grid.width(), 26);
    assert_eq!(grid.height(), 15);

    // Month grid on the same canvas degrades the same way.
    let month = layout::month_grid(Canvas::new(20, 20), 35);
    assert_eq!(month.dot_size, 1);
    assert_eq!(month.width(), 7);
}

#[test]
fn test_year_grid_is_pure() {
    let c = canvas(size::TABLET_LANDSCAPE);
    let days = days_in_year(2024);
    assert_eq!(layout::year_grid(c, days), layout::year_grid(c, days));
}

// ============================================================================
// Month grid
// ============================================================================

#[test]
fn test_month_padding_is_monday_first() {
    // Saturday
    assert_eq!(layout::month_padding(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()), 5);
    // Monday
    assert_eq!(layout::month_padding(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()), 0);
    // Sunday
    assert_eq!(layout::month_padding(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()), 6);
}

#[test]
fn test_month_grid_width_bound() {
    let grid = layout::month_grid(canvas(size::PHONE), 35);
    // floor(0.75 * 1179 / 9.4) = 94
    assert_eq!(grid.dot_size, 94);
    assert_eq!(grid.columns, 7);
    assert_eq!(grid.rows, 5);
    assert!(grid.width() as f64 <= 1179.0 * 0.75);
}

#[test]
fn test_month_grid_height_bound_on_landscape() {
    let grid = layout::month_grid(canvas(size::SMALL_LANDSCAPE), 42);
    // floor(600 * 0.4 / 9.8) = 24, tighter than floor(600 / 9.4) = 63
    assert_eq!(grid.dot_size, 24);
}

// ============================================================================
// Day ring and card
// ============================================================================

#[test]
fn test_ring_size_capped() {
    let ring = RingGeometry::for_canvas(canvas(size::PHONE), true);
    assert_eq!(ring.size, 500);
    assert_eq!(ring.stroke_width, 40);
    assert_approx_eq!(ring.radius, 230.0, 1e-9);
}

#[test]
fn test_ring_shrinks_with_tasks() {
    let c = canvas(size::SMALL_PORTRAIT);
    let with_tasks = RingGeometry::for_canvas(c, true);
    let without = RingGeometry::for_canvas(c, false);
    assert_eq!(with_tasks.size, 150);
    assert_eq!(without.size, 180);
    assert_eq!(with_tasks.stroke_width, 12);
}

#[test]
fn test_ring_dash_offset() {
    let ring = RingGeometry::for_canvas(canvas(size::PHONE), false);
    assert_approx_eq!(ring.dash_offset(0.0), ring.circumference, 1e-9);
    assert_approx_eq!(ring.dash_offset(75.0), ring.circumference * 0.25, 1e-9);
    assert_approx_eq!(ring.dash_offset(100.0), 0.0, 1e-9);
    // clamped
    assert_approx_eq!(ring.dash_offset(150.0), 0.0, 1e-9);
    assert_approx_eq!(ring.dash_offset(-10.0), ring.circumference, 1e-9);
}

#[test]
fn test_card_width_by_aspect() {
    assert_approx_eq!(card_width(canvas(size::SMALL_LANDSCAPE)), 480.0, 1e-9);
    assert_approx_eq!(card_width(canvas(size::SMALL_PORTRAIT)), 255.0, 1e-9);
}

#[test]
fn test_scale_uses_tighter_axis() {
    assert_approx_eq!(canvas(size::PHONE).scale(), 1.0, 1e-12);
    let tablet = canvas(size::TABLET_LANDSCAPE);
    assert_approx_eq!(tablet.scale(), 2048.0 / 2556.0, 1e-12);
}
