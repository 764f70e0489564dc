//! Completion aggregation across stored days.
//!
//! Failures never escape this module: a directory that cannot be listed gives
//! an empty map, and a file that cannot be read is left out of it.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use wallpaper_common::TodoCompletionMap;

use crate::parse::{parse_categorized, ParsedDay};
use crate::source::TodoSource;

/// Parse every stored day into a date → completion map.
pub async fn build_completion_map(source: &dyn TodoSource) -> TodoCompletionMap {
    let mut map = TodoCompletionMap::new();

    let dates = match source.dates().await {
        Ok(dates) => dates,
        Err(e) => {
            warn!(error = %e, "Todo storage unavailable, rendering without completion data");
            return map;
        }
    };

    for date in dates {
        match source.read(date).await {
            Ok(content) => {
                map.insert(date, parse_categorized(&content).completion);
            }
            Err(e) => {
                warn!(date = %date, error = %e, "Skipping unreadable todo file");
            }
        }
    }

    info!(days = map.len(), "Built todo completion map");
    map
}

/// Parse a single day's file. Missing or unreadable files mean "no data".
pub async fn load_day(source: &dyn TodoSource, date: NaiveDate) -> Option<ParsedDay> {
    match source.read(date).await {
        Ok(content) => Some(parse_categorized(&content)),
        Err(e) => {
            debug!(date = %date, error = %e, "No todo data for day");
            None
        }
    }
}
