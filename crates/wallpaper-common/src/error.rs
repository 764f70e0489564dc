//! Error types for the wallpaper services.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using WallpaperError.
pub type WallpaperResult<T> = Result<T, WallpaperError>;

/// Primary error type for wallpaper operations.
#[derive(Debug, Error)]
pub enum WallpaperError {
    // === Request Errors ===
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    // === Data Errors ===
    #[error("Failed to read todo file {}: {source}", path.display())]
    TodoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Todo directory unavailable: {0}")]
    TodoDirectory(String),

    #[error("Quote service error: {0}")]
    QuoteError(String),

    // === Rendering Errors ===
    #[error("Font loading failed: {0}")]
    FontError(String),

    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl WallpaperError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            WallpaperError::InvalidParameter { .. } | WallpaperError::InvalidTimezone(_) => 400,
            WallpaperError::TodoRead { .. } | WallpaperError::TodoDirectory(_) => 404,
            WallpaperError::QuoteError(_) => 502,
            _ => 500,
        }
    }

    /// Errors that the render path recovers from with a fallback value.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WallpaperError::TodoRead { .. }
                | WallpaperError::TodoDirectory(_)
                | WallpaperError::QuoteError(_)
                | WallpaperError::InvalidTimezone(_)
        )
    }
}

impl From<std::io::Error> for WallpaperError {
    fn from(err: std::io::Error) -> Self {
        WallpaperError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for WallpaperError {
    fn from(err: serde_json::Error) -> Self {
        WallpaperError::QuoteError(format!("JSON error: {}", err))
    }
}
