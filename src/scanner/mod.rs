pub mod file_filter;
pub mod image_scanner;

pub use file_filter::{extension_of, ImageFilter};
pub use image_scanner::{ImageFile, ImageScanner, ScanStatistics};
