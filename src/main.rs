use clap::Parser;
use imagelist::{Cli, ImageList, ImageListError, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();
    setup_logging(cli.verbosity_level());

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let imagelist = match ImageList::from_cli(&cli) {
        Ok(imagelist) => imagelist,
        Err(e) => {
            print_startup_error(&cli, &e);
            return exit_code_for(&e);
        }
    };

    let directory = match cli.target_directory() {
        Ok(directory) => directory,
        Err(e) => {
            imagelist.handle_error(&e);
            return exit_code_for(&e);
        }
    };

    if cli.dry_run {
        return handle_dry_run(&imagelist, &directory);
    }

    match imagelist.run(&directory) {
        Ok(report) => {
            imagelist.output_formatter().print_run_report(&report);
            0
        }
        Err(e) => {
            imagelist.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &ImageListError) -> i32 {
    match error {
        ImageListError::Config { .. } => 2,
        ImageListError::InvalidPath { .. } => 3,
        ImageListError::Permission { .. } => 7,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "imagelist.toml".to_string());

    match ImageList::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  imagelist --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!(
                "Failed to generate configuration file: {}",
                e.user_message()
            );
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(imagelist: &ImageList, directory: &std::path::Path) -> i32 {
    let formatter = imagelist.output_formatter();
    let config = imagelist.config();

    let images = match imagelist.preview(directory) {
        Ok(images) => images,
        Err(e) => {
            imagelist.handle_error(&e);
            return exit_code_for(&e);
        }
    };

    if formatter.mode() == OutputMode::Json {
        let plan = serde_json::json!({
            "type": "dry_run",
            "directory": directory.display().to_string(),
            "would_clear": config.output.clear_files,
            "listing_file": config.output.listing_file,
            "images": images.iter().map(|i| i.filename.as_str()).collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&plan).unwrap_or_else(|_| "{}".to_string())
        );
        return 0;
    }

    formatter.warning("DRY RUN MODE - No files will be cleared or written");
    formatter.print_separator();
    formatter.success(&format!(
        "Would clear {}.",
        config.output.clear_files.join(", ")
    ));
    formatter.success(&format!(
        "Would write {} with {} image file{}.",
        config.output.listing_file,
        images.len(),
        if images.len() == 1 { "" } else { "s" }
    ));
    for image in &images {
        formatter.info(&image.filename);
    }

    0
}

fn print_startup_error(cli: &Cli, error: &ImageListError) {
    let formatter = OutputFormatter::new(cli.output_mode(), 0, false);
    formatter.print_user_friendly_error(error);
}

fn setup_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "imagelist=warn",
        1 => "imagelist=info",
        _ => "imagelist=debug",
    };

    // RUST_LOG still wins when set
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
