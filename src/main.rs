//! DriveLinks refresh runner.
//!
//! Batch entry point meant for schedulers: loads the configuration, runs the
//! report pipeline over the configured listing and writes the report JSON.
//! Runs started with `--from-trigger` are throttled to one per
//! `refresh.min_interval_seconds`.

use std::path::Path;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use drivelinks_core::config::AppConfig;
use drivelinks_core::error::AppError;
use drivelinks_core::traits::SelectionStore;
use drivelinks_service::{
    FixtureListing, JsonFileSelectionStore, PipelineOptions, RefreshDecision, RefreshState,
    RefreshThrottle, ReportOutcome, ReportPipeline,
};

/// Refresh the DriveLinks report
#[derive(Debug, Parser)]
#[command(name = "drivelinks-refresh", version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// The run was started by a scheduled trigger and may be throttled
    #[arg(long)]
    from_trigger: bool,
}

fn main() {
    let args = Args::parse();

    let config = match load_configuration(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&config, args.from_trigger) {
        tracing::error!("Refresh failed: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
        .map_err(|e| AppError::configuration(format!("Config load error: {e}")))
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// One refresh
fn run(config: &AppConfig, from_trigger: bool) -> Result<(), AppError> {
    tracing::info!("Starting DriveLinks refresh v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Throttle trigger runs ────────────────────────────
    let state_path = Path::new(&config.refresh.state_path);
    let last_run = RefreshState::load(state_path)?.map(|s| s.last_run_at);
    let throttle = RefreshThrottle::from_config(&config.refresh);

    if let RefreshDecision::Skip { next_allowed } =
        throttle.decide(from_trigger, last_run, Utc::now())
    {
        tracing::info!(%next_allowed, "Refreshed too recently, skipping");
        return Ok(());
    }

    // ── Step 2: Scope from config and stored selection ───────────
    let selection = JsonFileSelectionStore::new(&config.selection.path).load()?;
    let options = PipelineOptions::from_config(&config.report, &config.listing, &selection);
    tracing::info!(
        selected_folders = selection.len(),
        all_folders = config.report.all_folders,
        "Report scope loaded"
    );

    // ── Step 3: Listing source ───────────────────────────────────
    let source = config
        .listing
        .source
        .as_deref()
        .ok_or_else(|| AppError::configuration("listing.source is not set"))?;
    let listing = FixtureListing::from_path(source)?;

    // ── Step 4: Run the pipeline ─────────────────────────────────
    let outcome = ReportPipeline::new(listing).run(&options)?;

    let run_id = match &outcome {
        ReportOutcome::Ready(report) => {
            report.save(&config.output.path, config.output.pretty)?;
            tracing::info!(
                path = %config.output.path,
                rows = report.stats.rows,
                "Report written"
            );
            Some(report.run_id)
        }
        ReportOutcome::Empty(stats) => {
            tracing::warn!(
                folders = stats.folders_indexed,
                "No files found; add some files and try again"
            );
            None
        }
    };

    // ── Step 5: Record the run ───────────────────────────────────
    RefreshState {
        last_run_at: Utc::now(),
        run_id,
    }
    .save(state_path)?;

    tracing::info!("Refresh complete");
    Ok(())
}
