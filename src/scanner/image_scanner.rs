use crate::config::ScanConfig;
use crate::error::{ImageListError, Result};
use crate::scanner::file_filter::{extension_of, ImageFilter};
use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageFile {
    pub filename: String,
    /// Lowercased, with the leading dot.
    pub extension: String,
}

impl ImageFile {
    pub fn new<S: Into<String>>(filename: S) -> Self {
        let filename = filename.into();
        let extension = extension_of(&filename).to_lowercase();

        Self {
            filename,
            extension,
        }
    }
}

pub struct ImageScanner {
    filter: ImageFilter,
}

impl ImageScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            filter: ImageFilter::new(config),
        }
    }

    /// Lists the immediate entries of `root` and returns the image files among
    /// them, sorted by code point. Any unreadable entry aborts the scan.
    pub fn scan_directory<P: AsRef<Path>>(&self, root: P) -> Result<Vec<ImageFile>> {
        let root_path = root.as_ref();

        if !root_path.exists() {
            return Err(ImageListError::InvalidPath {
                path: root_path.display().to_string(),
            });
        }

        if !root_path.is_dir() {
            return Err(ImageListError::InvalidPath {
                path: format!("{} is not a directory", root_path.display()),
            });
        }

        let walker = WalkDir::new(root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        let mut images = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| ImageListError::scan(root_path, e))?;

            if let Some(image) = self.process_entry(&entry) {
                images.push(image);
            }
        }

        // String ordering compares UTF-8 bytes, which matches code point order.
        images.sort_by(|a, b| a.filename.cmp(&b.filename));

        debug!(
            "found {} image files in {}",
            images.len(),
            root_path.display()
        );

        Ok(images)
    }

    fn process_entry(&self, entry: &DirEntry) -> Option<ImageFile> {
        // Symlinks are not followed, so a link to a file reports as a symlink
        // and is skipped along with directories and special files.
        if !entry.file_type().is_file() {
            trace!("skipping non-file entry {}", entry.path().display());
            return None;
        }

        let filename = entry.file_name().to_string_lossy();
        if !self.filter.is_image_file(&filename) {
            trace!("skipping non-image file {}", filename);
            return None;
        }

        Some(ImageFile::new(filename))
    }

    pub fn get_statistics(&self, images: &[ImageFile]) -> ScanStatistics {
        let mut files_by_extension = BTreeMap::new();
        for image in images {
            *files_by_extension.entry(image.extension.clone()).or_insert(0) += 1;
        }

        ScanStatistics {
            total_files: images.len(),
            files_by_extension,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanStatistics {
    pub total_files: usize,
    pub files_by_extension: BTreeMap<String, usize>,
}

impl ScanStatistics {
    pub fn display_summary(&self) -> String {
        let mut summary = format!("Scan Results:\n  Total images: {}\n", self.total_files);

        if !self.files_by_extension.is_empty() {
            summary.push_str("  Images by type:\n");
            let mut extensions: Vec<_> = self.files_by_extension.iter().collect();
            extensions.sort_by(|a, b| b.1.cmp(a.1));

            for (ext, count) in extensions {
                summary.push_str(&format!("    {}: {} files\n", ext, count));
            }
        }

        summary
    }
}
