use crate::scanner::{ImageFile, ScanStatistics};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Outcome of one clear/scan/write run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub directory: PathBuf,
    pub cleared_files: Vec<String>,
    pub listing_file: PathBuf,
    pub image_count: usize,
    pub images: Vec<String>,
    pub extensions: BTreeMap<String, usize>,
    pub generated_at: DateTime<Utc>,
}

impl RunReport {
    pub fn new(
        directory: &Path,
        cleared_files: &[String],
        listing_file: PathBuf,
        images: &[ImageFile],
        statistics: ScanStatistics,
    ) -> Self {
        Self {
            directory: directory.to_path_buf(),
            cleared_files: cleared_files.to_vec(),
            listing_file,
            image_count: images.len(),
            images: images.iter().map(|i| i.filename.clone()).collect(),
            extensions: statistics.files_by_extension,
            generated_at: Utc::now(),
        }
    }

    pub fn cleared_summary(&self) -> String {
        format!("Cleared {}.", self.cleared_files.join(", "))
    }

    pub fn listing_summary(&self) -> String {
        let name = self
            .listing_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.listing_file.display().to_string());

        format!(
            "Generated {} with {} image file{}.",
            name,
            self.image_count,
            if self.image_count == 1 { "" } else { "s" }
        )
    }
}
