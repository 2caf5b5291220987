//! Report CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use drivelinks_core::error::AppError;
use drivelinks_service::{ReportOutcome, ReportPipeline, SheetLayout, build_rows};

use super::ScopeArgs;

/// Arguments for the report command
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Listing and scope flags
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Print the sheet rows (with hyperlink formulas) instead of the summary
    #[arg(long)]
    pub sheet: bool,
}

/// Report display row
#[derive(Debug, Serialize, Tabled)]
struct ReportRow {
    /// Folder path
    folder_path: String,
    /// File name
    file: String,
    /// Direct link
    direct_link: String,
    /// Shared with
    shared_with: String,
}

/// Execute the report command
pub fn execute(args: &ReportArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let options = args.scope.options(&config)?;
    let listing = args.scope.open_listing(&config)?;

    let outcome = ReportPipeline::new(listing).run(&options)?;

    let report = match outcome {
        ReportOutcome::Ready(report) => report,
        ReportOutcome::Empty(stats) => {
            output::print_warning("No files found; add some files and try again.");
            if format == OutputFormat::Json {
                output::print_json(&stats);
            }
            return Ok(());
        }
    };

    if args.sheet {
        let sheet = build_rows(&report.buckets, SheetLayout::from_config(&config.report));
        match format {
            OutputFormat::Json => output::print_json(&sheet),
            OutputFormat::Table => {
                println!("{}", sheet.header.join("\t"));
                for row in &sheet.rows {
                    println!("{}", row.cells.join("\t"));
                }
            }
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => output::print_json(&report),
        OutputFormat::Table => {
            let rows: Vec<ReportRow> = report
                .non_empty_buckets()
                .flat_map(|bucket| {
                    bucket.files.iter().map(move |file| ReportRow {
                        folder_path: bucket.path.clone(),
                        file: file.name.clone(),
                        direct_link: file.direct_link.clone(),
                        shared_with: file.access_summary.clone(),
                    })
                })
                .collect();
            output::print_list(&rows, format);

            let stats = &report.stats;
            output::print_kv("Run", &report.run_id.to_string());
            output::print_kv("Folders indexed", &stats.folders_indexed.to_string());
            output::print_kv("Files", &stats.files_ingested.to_string());
            output::print_kv("Rows", &stats.rows.to_string());
            if stats.skipped() > 0 {
                output::print_warning(&format!("{} listing items skipped", stats.skipped()));
            }
        }
    }

    Ok(())
}
