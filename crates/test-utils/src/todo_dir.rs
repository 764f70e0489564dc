//! Temporary todo directories.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

/// A throwaway directory of daily todo files, removed on drop.
pub struct TodoDir {
    dir: TempDir,
}

impl TodoDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` as the file for `date`.
    pub fn write_day(&self, date: NaiveDate, content: &str) -> PathBuf {
        let path = self.dir.path().join(format!("{}.md", date.format("%Y-%m-%d")));
        std::fs::write(&path, content).expect("write todo file");
        path
    }

    /// Write an arbitrary file (for non-date names and corrupt content).
    pub fn write_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("write raw file");
        path
    }
}

impl Default for TodoDir {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_day_uses_iso_name() {
        let dir = TodoDir::new();
        let path = dir.write_day(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(), "- [x] a");
        assert!(path.ends_with("2024-03-09.md"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "- [x] a");
    }
}
