//! Wall-clock resolution in the caller's timezone.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

use wallpaper_common::{WallpaperError, WallpaperResult};

/// Convert `instant` into the named IANA zone as a naive local date-time.
pub fn now_in(tz_name: &str, instant: DateTime<Utc>) -> WallpaperResult<NaiveDateTime> {
    let tz: Tz = tz_name
        .trim()
        .parse()
        .map_err(|_| WallpaperError::InvalidTimezone(tz_name.to_string()))?;
    Ok(instant.with_timezone(&tz).naive_local())
}

/// Current local time for the request.
///
/// Unknown zones fall back to the host's local clock.
pub fn resolve_now(tz: Option<&str>, default_tz: &str) -> NaiveDateTime {
    let name = tz.filter(|s| !s.trim().is_empty()).unwrap_or(default_tz);
    match now_in(name, Utc::now()) {
        Ok(now) => now,
        Err(e) => {
            warn!(error = %e, "Falling back to system local time");
            Local::now().naive_local()
        }
    }
}
