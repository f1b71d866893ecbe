use crate::config::OutputConfig;
use crate::error::{ImageListError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Truncates a fixed set of files to empty, creating any that are missing.
pub struct FileClearer {
    filenames: Vec<String>,
}

impl FileClearer {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            filenames: config.clear_files.clone(),
        }
    }

    /// Clears every file in order. The first failure aborts the remaining
    /// files and is returned as is.
    pub fn clear_all(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut cleared = Vec::with_capacity(self.filenames.len());

        for filename in &self.filenames {
            let path = directory.join(filename);
            fs::write(&path, "").map_err(|e| ImageListError::file_access(&path, e))?;
            debug!("cleared {}", path.display());
            cleared.push(path);
        }

        Ok(cleared)
    }

    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }
}
