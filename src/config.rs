use crate::error::{ImageListError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Lowercase extensions including the leading dot.
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Files truncated to empty before every scan, in this order.
    pub clear_files: Vec<String>,
    pub listing_file: String,
    pub header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                ".jpg".to_string(),
                ".jpeg".to_string(),
                ".png".to_string(),
                ".gif".to_string(),
                ".webp".to_string(),
                ".bmp".to_string(),
                ".tiff".to_string(),
                ".tif".to_string(),
            ],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            clear_files: vec!["a.csv".to_string(), "s.csv".to_string()],
            listing_file: "image_list.csv".to_string(),
            header: "Filename".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ImageListError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ImageListError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ImageListError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    /// Only an explicitly named file is loaded. Without one the built-in
    /// defaults apply, so a bare invocation always behaves the same way.
    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref extensions) = cli_args.extensions {
            self.scan.extensions = extensions
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .map(|s| if s.starts_with('.') { s } else { format!(".{}", s) })
                .collect();
        }

        if let Some(ref listing_file) = cli_args.listing_file {
            self.output.listing_file = listing_file.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| ImageListError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| ImageListError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.is_empty() {
            return Err(ImageListError::Config {
                message: "At least one image extension must be specified".to_string(),
            });
        }

        if let Some(ext) = self
            .scan
            .extensions
            .iter()
            .find(|ext| !ext.starts_with('.') || ext.len() < 2)
        {
            return Err(ImageListError::Config {
                message: format!("Extension '{}' must start with '.' and name a suffix", ext),
            });
        }

        if self.output.clear_files.is_empty() {
            return Err(ImageListError::Config {
                message: "At least one file to clear must be specified".to_string(),
            });
        }

        validate_file_name("listing_file", &self.output.listing_file)?;
        for name in &self.output.clear_files {
            validate_file_name("clear_files", name)?;
        }

        if self.output.clear_files.contains(&self.output.listing_file) {
            return Err(ImageListError::Config {
                message: format!(
                    "{} cannot be both the listing file and a file to clear",
                    self.output.listing_file
                ),
            });
        }

        if self.output.header.is_empty() || self.output.header.contains(['\n', '\r']) {
            return Err(ImageListError::Config {
                message: "Header must be a single non-empty line".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

// Output names are resolved against the target directory, so they must be a
// single normal path component.
fn validate_file_name(field: &str, name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let is_plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if !is_plain || name.contains(['/', '\\']) {
        return Err(ImageListError::Config {
            message: format!("{} entry '{}' must be a plain file name", field, name),
        });
    }

    Ok(())
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub extensions: Option<String>,
    pub listing_file: Option<String>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions(mut self, extensions: Option<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_listing_file(mut self, listing_file: Option<String>) -> Self {
        self.listing_file = listing_file;
        self
    }
}
