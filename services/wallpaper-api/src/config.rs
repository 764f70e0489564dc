//! Service configuration.
//!
//! Loaded from an optional YAML file; every field has a default so an empty
//! or missing file yields a working service. Command-line flags override
//! file values in `main`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use renderer::DotEncoding;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_WIDTH: u32 = 1179;
pub const DEFAULT_HEIGHT: u32 = 2556;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub listen: String,
    pub log_level: String,
    /// One `YYYY-MM-DD.md` file per day.
    pub todos_dir: PathBuf,
    pub fonts: FontConfig,
    pub quotes: QuoteConfig,
    pub render: RenderConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            todos_dir: PathBuf::from("data/todos"),
            fonts: FontConfig::default(),
            quotes: QuoteConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub dir: PathBuf,
    pub family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets/fonts"),
            family: "Inter".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// When false only the built-in quotes are used.
    pub remote: bool,
    pub url: String,
    pub cache_ttl_secs: u64,
    pub timeout_secs: u64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            remote: true,
            url: "https://zenquotes.io/api/random".to_string(),
            cache_ttl_secs: 3600,
            timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub default_width: u32,
    pub default_height: u32,
    /// Larger requested dimensions are clamped to this.
    pub max_dimension: u32,
    /// IANA zone used when the request has no `tz`.
    pub default_timezone: String,
    pub dot_encoding: DotEncoding,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            max_dimension: 4096,
            default_timezone: "UTC".to_string(),
            dot_encoding: DotEncoding::Slices,
        }
    }
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// The file was absent.
    Defaults(PathBuf),
}

impl ConfigOrigin {
    /// Report the origin. Call once tracing is initialized.
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => {
                info!(path = %path.display(), "Loaded service config")
            }
            ConfigOrigin::Defaults(path) => {
                warn!(path = %path.display(), "Config file not found, using defaults")
            }
        }
    }
}

impl ServiceConfig {
    /// Load from `path`; a missing file yields defaults.
    ///
    /// Runs before the subscriber is installed, so nothing is logged here.
    pub fn load(path: &Path) -> Result<(Self, ConfigOrigin)> {
        if !path.exists() {
            return Ok((Self::default(), ConfigOrigin::Defaults(path.to_path_buf())));
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;

        Ok((config, ConfigOrigin::File(path.to_path_buf())))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
