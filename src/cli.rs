use crate::config::{CliOverrides, Config};
use crate::error::{ImageListError, Result};
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imagelist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List the image files of a directory into a CSV file")]
#[command(
    long_about = "ImageList empties a.csv and s.csv, then writes the sorted names of every \
                  image file in the directory to image_list.csv. Only the top level of the \
                  directory is scanned and files are matched by extension."
)]
#[command(after_help = "EXAMPLES:\n  \
    imagelist\n  \
    imagelist --directory ~/Pictures/upload\n  \
    imagelist --extensions png,jpg --listing-file photos.csv\n  \
    imagelist --config imagelist.toml --output-format json")]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Image extensions to list (comma-separated)
    #[arg(short, long, help = "Image extensions to list (e.g., png,jpg,webp)")]
    pub extensions: Option<String>,

    /// Name of the CSV listing file
    #[arg(long)]
    pub listing_file: Option<String>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress status output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be done without touching any file)
    #[arg(long, help = "Show what would be cleared and listed without writing")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_extensions(self.extensions.clone())
            .with_listing_file(self.listing_file.clone())
    }

    /// The directory every operation works in: `--directory` if given,
    /// otherwise the process's working directory at launch.
    pub fn target_directory(&self) -> Result<PathBuf> {
        match self.directory {
            Some(ref dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|e| ImageListError::InvalidPath {
                path: format!("current directory is unavailable: {}", e),
            }),
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        match self.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
