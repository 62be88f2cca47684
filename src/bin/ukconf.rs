//! ukconf CLI Binary
//!
//! Command-line interface for the dotconfig overlay engine.

use clap::Parser;
use std::process;
use tracing::{debug, info};
use ukconf::cli::{map_error, Cli, RunContext};
use ukconf::config::{AppConfig, ConfigLoader};
use ukconf::error::ApiError;
use ukconf::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let settings = load_settings(&cli);
    let logging_config = build_logging_config(&cli, settings.as_ref().ok());

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            debug!("Failed to load settings: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let context = RunContext::new(&settings, cli.non_interactive);
    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            debug!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn load_settings(cli: &Cli) -> Result<AppConfig, ApiError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration from CLI args and settings.
/// Precedence: CLI flags override settings override defaults.
fn build_logging_config(cli: &Cli, settings: Option<&AppConfig>) -> LoggingConfig {
    let mut config = settings.map(|s| s.logging.clone()).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
        if cli.log_output.is_none() {
            config.output = "file".to_string();
        }
    }

    config
}
