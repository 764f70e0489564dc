//! Storage of daily todo files.
//!
//! One markdown file per calendar date, named `YYYY-MM-DD.md`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use wallpaper_common::{WallpaperError, WallpaperResult};

const FILE_EXTENSION: &str = "md";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read access to stored daily todo files.
#[async_trait]
pub trait TodoSource: Send + Sync {
    /// Every date that has a stored file, ascending.
    async fn dates(&self) -> WallpaperResult<Vec<NaiveDate>>;

    /// Raw markdown for one date.
    async fn read(&self, date: NaiveDate) -> WallpaperResult<String>;
}

/// Todo files in a flat directory.
#[derive(Debug, Clone)]
pub struct FsTodoStore {
    dir: PathBuf,
}

impl FsTodoStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `date`'s tasks.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.{}", date.format(DATE_FORMAT), FILE_EXTENSION))
    }
}

/// Extract the date from a `YYYY-MM-DD.md` file name.
pub fn date_from_file_name(name: &str) -> Option<NaiveDate> {
    let stem = name.strip_suffix(FILE_EXTENSION)?.strip_suffix('.')?;
    NaiveDate::parse_from_str(stem, DATE_FORMAT).ok()
}

#[async_trait]
impl TodoSource for FsTodoStore {
    async fn dates(&self) -> WallpaperResult<Vec<NaiveDate>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(|e| {
            WallpaperError::TodoDirectory(format!("{}: {}", self.dir.display(), e))
        })?;

        let mut dates = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            WallpaperError::TodoDirectory(format!("{}: {}", self.dir.display(), e))
        })? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            match date_from_file_name(name) {
                Some(date) => dates.push(date),
                None => debug!(file = %name, "Skipping non-date todo file"),
            }
        }

        dates.sort_unstable();
        dates.dedup();
        Ok(dates)
    }

    async fn read(&self, date: NaiveDate) -> WallpaperResult<String> {
        let path = self.path_for(date);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| WallpaperError::TodoRead { path, source })
    }
}
