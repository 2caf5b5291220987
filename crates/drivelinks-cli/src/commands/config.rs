//! Configuration management CLI commands.

use std::path::Path;

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use drivelinks_core::error::{AppError, ErrorKind};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => println!("{config:#?}"),
            }
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv(
                    "Listing",
                    config.listing.source.as_deref().unwrap_or("<not set>"),
                );
                output::print_kv("Page size", &config.listing.page_size.to_string());
                output::print_kv("Selection", &config.selection.path);
                output::print_kv("Output", &config.output.path);
                output::print_kv(
                    "Refresh interval",
                    &format!("{}s", config.refresh.min_interval_seconds),
                );
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = Path::new(out_path).parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::with_source(ErrorKind::Storage, "Failed to create dir", e)
                })?;
            }

            std::fs::write(out_path, default_config).map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to write config", e)
            })?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}
