//! Common test fixtures for wallpaper tests.

use chrono::{NaiveDate, NaiveDateTime};

/// Reference canvas sizes.
pub mod size {
    /// iPhone portrait (the service default)
    pub const PHONE: (u32, u32) = (1179, 2556);

    /// Tablet landscape
    pub const TABLET_LANDSCAPE: (u32, u32) = (2732, 2048);

    /// Small portrait canvas, cheap to rasterize in tests
    pub const SMALL_PORTRAIT: (u32, u32) = (300, 600);

    /// Small landscape canvas
    pub const SMALL_LANDSCAPE: (u32, u32) = (800, 600);
}

/// Sample todo files.
pub mod markdown {
    /// Two work tasks (one done), one finished fitness task, no mind tasks.
    pub const BASIC: &str = "## Work\n- [x] A\n- [ ] B\n## Fitness\n- [x] C\n";

    /// All three categories plus a deadline header.
    pub const FULL_DAY: &str = "\
# 2024-06-15

## Work
- [x] Ship release notes
- [ ] Review pull requests
* [x] Plan sprint

## Fitness
- [x] Morning run

## Mind
- [ ] Read 20 pages
- [x] Meditate

## Deadline
Tax filing due
";

    /// Tasks before any header belong to work.
    pub const NO_HEADERS: &str = "- [x] first\n- [ ] second\nplain text\n";

    /// Headers and prose but no checkboxes.
    pub const NO_TASKS: &str = "# Notes\nNothing planned today.\n## Mind\n";
}

/// 2024-06-15, a Saturday in a leap year.
pub fn leap_day_sample() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

/// Build a local date-time without ceremony.
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid date-time")
}
