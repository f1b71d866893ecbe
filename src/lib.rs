pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, OutputConfig, ScanConfig};
pub use error::{ImageListError, Result, UserFriendlyError};

// Core functionality re-exports
pub use listing::{render_listing, FileClearer, ListingWriter, RunReport};
pub use scanner::{extension_of, ImageFile, ImageFilter, ImageScanner, ScanStatistics};
pub use ui::{OutputFormatter, OutputMode};

use log::info;
use std::path::Path;

/// Main library interface: clears the fixed files, scans a directory for
/// images and writes the listing.
pub struct ImageList {
    config: Config,
    output_formatter: OutputFormatter,
}

impl ImageList {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
        }
    }

    /// Create an ImageList instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;

        Ok(Self::new(
            config,
            cli_args.output_mode(),
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Clear, scan, write; in that order. The first filesystem error stops
    /// the run and leaves whatever was already done in place.
    pub fn run(&self, directory: &Path) -> Result<RunReport> {
        if !directory.is_dir() {
            return Err(ImageListError::InvalidPath {
                path: format!("{} is not a directory", directory.display()),
            });
        }

        // Step 1: Empty the fixed files
        self.output_formatter
            .start_operation(&format!("Clearing {}", self.config.output.clear_files.join(", ")));
        let clearer = FileClearer::new(&self.config.output);
        clearer.clear_all(directory)?;

        // Step 2: Scan for images
        self.output_formatter
            .start_operation(&format!("Scanning {}", directory.display()));
        let scanner = ImageScanner::new(&self.config.scan);
        let images = scanner.scan_directory(directory)?;
        let statistics = scanner.get_statistics(&images);
        self.output_formatter.debug(&statistics.display_summary());

        // Step 3: Write the listing
        let writer = ListingWriter::new(&self.config.output);
        let listing_path = writer.write(directory, &images)?;
        info!(
            "listed {} images from {} into {}",
            images.len(),
            directory.display(),
            listing_path.display()
        );

        Ok(RunReport::new(
            directory,
            clearer.filenames(),
            listing_path,
            &images,
            statistics,
        ))
    }

    /// Scan only; nothing is cleared or written.
    pub fn preview(&self, directory: &Path) -> Result<Vec<ImageFile>> {
        ImageScanner::new(&self.config.scan).scan_directory(directory)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)
            .map_err(|e| ImageListError::file_access(output_path.as_ref(), e))?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &ImageListError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Run with the built-in defaults against `directory`, printing nothing.
pub fn list_images(directory: &Path) -> Result<RunReport> {
    ImageList::new(Config::default(), OutputMode::Plain, 0, true).run(directory)
}
