//! CLI command definitions and dispatch.

pub mod config;
pub mod path;
pub mod query;
pub mod report;
pub mod selection;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;
use drivelinks_core::config::AppConfig;
use drivelinks_core::error::AppError;
use drivelinks_core::traits::SelectionStore;
use drivelinks_service::{FixtureListing, JsonFileSelectionStore, PipelineOptions};

/// DriveLinks: folder-path and sharing reports over a drive listing
#[derive(Debug, Parser)]
#[command(name = "drivelinks", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the report pipeline and print its rows
    Report(report::ReportArgs),
    /// Print the folder and file queries a run would send
    Query(query::QueryArgs),
    /// Resolve the path of one folder
    Path(path::PathArgs),
    /// Folder selection management
    Selection(selection::SelectionArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Report(args) => report::execute(args, &self.config, self.format),
            Commands::Query(args) => query::execute(args, &self.config, self.format),
            Commands::Path(args) => path::execute(args, &self.config, self.format),
            Commands::Selection(args) => selection::execute(args, &self.config, self.format),
            Commands::Config(args) => config::execute(args, &self.config, self.format),
        }
    }
}

/// Scope flags shared by the commands that drain a listing.
#[derive(Debug, Clone, Args)]
pub struct ScopeArgs {
    /// Listing fixture to read (defaults to `listing.source`)
    #[arg(short, long)]
    pub listing: Option<String>,

    /// Include items shared with the principal
    #[arg(long)]
    pub include_shared: bool,

    /// Scope the report to the stored folder selection
    #[arg(long)]
    pub selected: bool,

    /// Apply the selection to every descendant folder
    #[arg(long)]
    pub recursive: bool,
}

impl ScopeArgs {
    /// Pipeline options from config, overridden by the flags.
    pub fn options(&self, config: &AppConfig) -> Result<PipelineOptions, AppError> {
        let mut report = config.report.clone();
        report.include_shared |= self.include_shared;
        report.recursive |= self.recursive;
        if self.selected {
            report.all_folders = false;
        }

        let selection = open_selection(config).load()?;
        Ok(PipelineOptions::from_config(
            &report,
            &config.listing,
            &selection,
        ))
    }

    /// Open the listing fixture named by the flag or the config.
    pub fn open_listing(&self, config: &AppConfig) -> Result<FixtureListing, AppError> {
        let path = self
            .listing
            .as_deref()
            .or(config.listing.source.as_deref())
            .ok_or_else(|| {
                AppError::configuration("No listing source: pass --listing or set listing.source")
            })?;
        FixtureListing::from_path(path)
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: open the configured selection store
pub fn open_selection(config: &AppConfig) -> JsonFileSelectionStore {
    JsonFileSelectionStore::new(&config.selection.path)
}
