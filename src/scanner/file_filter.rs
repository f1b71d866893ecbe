use crate::config::ScanConfig;

/// Extension of `filename`: everything from the last `.` to the end, or the
/// empty string when there is no `.` at all. Unlike `Path::extension`, a
/// dotfile such as `.png` yields `.png`.
pub fn extension_of(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(index) => &filename[index..],
        None => "",
    }
}

pub struct ImageFilter {
    image_extensions: Vec<String>,
}

impl ImageFilter {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            image_extensions: config
                .extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
        }
    }

    pub fn is_image_file(&self, filename: &str) -> bool {
        let extension = extension_of(filename).to_lowercase();
        !extension.is_empty() && self.image_extensions.contains(&extension)
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}
