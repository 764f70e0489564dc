//! Time-progress math for the year, month and day periods.
//!
//! Year and month count whole days with today counted as elapsed. Only the
//! day period uses seconds.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

pub const SECONDS_PER_DAY: u32 = 86_400;

/// Calendar span a view measures progress through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Year,
    Month,
    Day,
}

/// Elapsed units out of the period total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodProgress {
    /// Days for year/month, seconds for day.
    pub elapsed: u32,
    pub total: u32,
    /// 0..=100
    pub percentage: f64,
}

impl PeriodProgress {
    fn new(elapsed: u32, total: u32) -> Self {
        let percentage = if total > 0 {
            (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            elapsed,
            total,
            percentage,
        }
    }

    /// Percentage with two decimals, e.g. `45.63`.
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.percentage)
    }

    /// Whole percent, truncated.
    pub fn whole_percent(&self) -> u32 {
        self.percentage.floor() as u32
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.elapsed)
    }
}

impl Period {
    pub fn progress(&self, now: NaiveDateTime) -> PeriodProgress {
        let date = now.date();
        match self {
            Period::Year => PeriodProgress::new(date.ordinal(), days_in_year(date.year())),
            Period::Month => {
                PeriodProgress::new(date.day(), days_in_month(date.year(), date.month()))
            }
            Period::Day => {
                PeriodProgress::new(now.num_seconds_from_midnight(), SECONDS_PER_DAY)
            }
        }
    }

    /// Footer noun: `... OF YEAR PASSED`.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Year => "YEAR",
            Period::Month => "MONTH",
            Period::Day => "DAY",
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

/// Dates of the year containing `date`, January 1st first.
pub fn year_dates(date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    start.iter_days().take(days_in_year(date.year()) as usize)
}

/// Dates of the month containing `date`, the 1st first.
pub fn month_dates(date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let start = date.with_day(1).unwrap_or(date);
    start
        .iter_days()
        .take(days_in_month(date.year(), date.month()) as usize)
}
