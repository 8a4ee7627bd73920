//! One-shot export of a finished session's picked regions.
//!
//! Each export is an independent timestamped JSON file; nothing is ever
//! read back. The file holds a plain JSON array of the picked regions
//! with their recorded fields, no version envelope.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::EXPORT_FILE_PREFIX;
use crate::quiz::types::PlayedRegion;

/// Writes session exports into a platform data directory.
pub struct ExportManager {
    export_dir: PathBuf,
}

impl ExportManager {
    /// Resolves the platform data directory and makes sure it exists.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "depquiz").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;
        Self::with_dir(project_dirs.data_dir())
    }

    /// Uses an explicit directory instead of the platform default.
    pub fn with_dir(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            export_dir: dir.to_path_buf(),
        })
    }

    /// Writes the picked regions as `departements_<epoch_ms>.json` and
    /// returns the path written.
    pub fn export(&self, payload: &[PlayedRegion], now_ms: i64) -> io::Result<PathBuf> {
        let path = self
            .export_dir
            .join(format!("{}_{}.json", EXPORT_FILE_PREFIX, now_ms));

        let json = serde_json::to_vec(payload)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&path, json)?;

        Ok(path)
    }
}
