//! Application configuration schemas.
//!
//! All configuration structs are deserialized from a TOML file via the
//! `config` crate, overlaid with `DRIVELINKS__*` environment variables.
//! Every section has defaults, so a missing file yields a usable config.

pub mod listing;
pub mod logging;
pub mod report;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::listing::ListingConfig;
use self::logging::LoggingConfig;
use self::report::ReportConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listing source settings.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Folder selection persistence.
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Report scope and layout preferences.
    #[serde(default)]
    pub report: ReportConfig,
    /// Where the batch runner writes the report.
    #[serde(default)]
    pub output: OutputConfig,
    /// Trigger throttling.
    #[serde(default)]
    pub refresh: RefreshConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Folder selection store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Path of the JSON file holding `{folderId: label}`.
    #[serde(default = "default_selection_path")]
    pub path: String,
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON report written by the batch runner.
    #[serde(default = "default_output_path")]
    pub path: String,
    /// Pretty-print the JSON report.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

/// Refresh throttling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Minimum seconds between two trigger-initiated runs.
    #[serde(default = "default_min_interval")]
    pub min_interval_seconds: u64,
    /// Path of the JSON file recording the last run.
    #[serde(default = "default_state_path")]
    pub state_path: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            path: default_selection_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: true,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            min_interval_seconds: default_min_interval(),
            state_path: default_state_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional; values from environment variables prefixed with
    /// `DRIVELINKS__` take precedence over it.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from(Path::new(path)).required(false))
            .add_source(
                config::Environment::with_prefix("DRIVELINKS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Check cross-field constraints the deserializer cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.listing.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn default_selection_path() -> String {
    "data/selection.json".to_string()
}

fn default_output_path() -> String {
    "data/report.json".to_string()
}

fn default_state_path() -> String {
    "data/refresh_state.json".to_string()
}

fn default_min_interval() -> u64 {
    21_600
}

fn default_true() -> bool {
    true
}
