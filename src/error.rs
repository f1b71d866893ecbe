use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageListError {
    #[error("Failed to access {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read directory {path}: {source}")]
    Scan {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Permission denied: {path}")]
    Permission { path: String },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ImageListError {
    /// Wrap an IO error with the path it happened on. Permission failures get
    /// their own variant so callers can map them to a distinct exit code.
    pub fn file_access<P: AsRef<std::path::Path>>(path: P, source: io::Error) -> Self {
        let path = path.as_ref().display().to_string();
        if source.kind() == io::ErrorKind::PermissionDenied {
            ImageListError::Permission { path }
        } else {
            ImageListError::FileAccess { path, source }
        }
    }

    pub fn scan<P: AsRef<std::path::Path>>(path: P, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .unwrap_or_else(|| path.as_ref())
            .display()
            .to_string();
        if source
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
        {
            ImageListError::Permission { path }
        } else {
            ImageListError::Scan { path, source }
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ImageListError {
    fn user_message(&self) -> String {
        match self {
            ImageListError::FileAccess { path, source } => {
                format!("Could not write {}: {}", path, source)
            }
            ImageListError::Scan { path, source } => {
                format!("Could not list directory {}: {}", path, source)
            }
            ImageListError::Permission { path } => {
                format!("Permission denied accessing: {}", path)
            }
            ImageListError::InvalidPath { path } => {
                format!("Invalid directory: {}", path)
            }
            ImageListError::Config { message } => {
                format!("Configuration error: {}", message)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ImageListError::Permission { .. } => Some(
                "Ensure you have read and write permissions for the target directory.".to_string(),
            ),
            ImageListError::InvalidPath { .. } => Some(
                "Run the command from the image directory or pass an existing directory with --directory.".to_string(),
            ),
            ImageListError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string(),
            ),
            ImageListError::FileAccess { .. } => Some(
                "Check that the disk is not full and the files are not locked by another program.".to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ImageListError {
    fn from(error: toml::de::Error) -> Self {
        ImageListError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageListError>;
