use crate::config::OutputConfig;
use crate::error::{ImageListError, Result};
use crate::scanner::ImageFile;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Header line, then one filename per line, joined with `\n` and no trailing
/// newline. Filenames are written verbatim: commas, quotes and embedded
/// newlines are not escaped.
pub fn render_listing(header: &str, images: &[ImageFile]) -> String {
    let mut content = String::from(header);
    for image in images {
        content.push('\n');
        content.push_str(&image.filename);
    }
    content
}

pub struct ListingWriter {
    listing_file: String,
    header: String,
}

impl ListingWriter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            listing_file: config.listing_file.clone(),
            header: config.header.clone(),
        }
    }

    /// Creates or overwrites the listing file in `directory`.
    pub fn write(&self, directory: &Path, images: &[ImageFile]) -> Result<PathBuf> {
        let path = directory.join(&self.listing_file);
        let content = render_listing(&self.header, images);

        fs::write(&path, content).map_err(|e| ImageListError::file_access(&path, e))?;
        debug!("wrote {} entries to {}", images.len(), path.display());

        Ok(path)
    }
}
