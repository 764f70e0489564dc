//! Wallpaper view selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minutes each view stays selected when no explicit view is requested.
pub const ROTATION_INTERVAL_MINUTES: u32 = 15;

/// The three wallpaper layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Yearly,
    Monthly,
    Daily,
}

impl ViewKind {
    /// Views in rotation order.
    pub const ROTATION: [ViewKind; 3] = [ViewKind::Yearly, ViewKind::Monthly, ViewKind::Daily];

    /// Parse the `view` query parameter. Unknown values yield `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "yearly" | "year" => Some(ViewKind::Yearly),
            "monthly" | "month" => Some(ViewKind::Monthly),
            "day" | "days" | "daily" => Some(ViewKind::Daily),
            _ => None,
        }
    }

    /// View shown at the given minute of the hour.
    pub fn for_minute(minute: u32) -> Self {
        let index = (minute / ROTATION_INTERVAL_MINUTES) as usize % Self::ROTATION.len();
        Self::ROTATION[index]
    }

    /// Explicit selection wins; otherwise rotate on the clock.
    pub fn select(param: Option<&str>, minute: u32) -> Self {
        param
            .and_then(Self::from_param)
            .unwrap_or_else(|| Self::for_minute(minute))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Yearly => "yearly",
            ViewKind::Monthly => "monthly",
            ViewKind::Daily => "daily",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_by_quarter_hour() {
        assert_eq!(ViewKind::for_minute(0), ViewKind::Yearly);
        assert_eq!(ViewKind::for_minute(14), ViewKind::Yearly);
        assert_eq!(ViewKind::for_minute(15), ViewKind::Monthly);
        assert_eq!(ViewKind::for_minute(29), ViewKind::Monthly);
        assert_eq!(ViewKind::for_minute(30), ViewKind::Daily);
        assert_eq!(ViewKind::for_minute(44), ViewKind::Daily);
        // Fourth quarter wraps back to the start.
        assert_eq!(ViewKind::for_minute(45), ViewKind::Yearly);
        assert_eq!(ViewKind::for_minute(59), ViewKind::Yearly);
    }

    #[test]
    fn test_param_aliases() {
        assert_eq!(ViewKind::from_param("year"), Some(ViewKind::Yearly));
        assert_eq!(ViewKind::from_param("YEARLY"), Some(ViewKind::Yearly));
        assert_eq!(ViewKind::from_param("month"), Some(ViewKind::Monthly));
        assert_eq!(ViewKind::from_param("days"), Some(ViewKind::Daily));
        assert_eq!(ViewKind::from_param("daily"), Some(ViewKind::Daily));
        assert_eq!(ViewKind::from_param("weekly"), None);
    }

    #[test]
    fn test_select_prefers_param() {
        assert_eq!(ViewKind::select(Some("day"), 0), ViewKind::Daily);
        assert_eq!(ViewKind::select(Some("bogus"), 20), ViewKind::Monthly);
        assert_eq!(ViewKind::select(None, 31), ViewKind::Daily);
    }
}
