//! Query CLI command.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use drivelinks_core::error::AppError;
use drivelinks_service::{QueryBuilder, QueryScope, ReportPipeline};

use super::ScopeArgs;

/// Arguments for the query command
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Listing and scope flags
    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Debug, Serialize)]
struct Queries {
    folder_query: String,
    file_query: String,
}

/// Execute the query command
pub fn execute(args: &QueryArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let options = args.scope.options(&config)?;
    let listing = args.scope.open_listing(&config)?;

    let index = ReportPipeline::new(listing).index_folders(&options)?;
    let builder = QueryBuilder::new(&index);
    let queries = Queries {
        folder_query: builder.build(&QueryScope::folders(options.include_shared))?,
        file_query: builder.build(&options.file_scope())?,
    };

    match format {
        OutputFormat::Json => output::print_json(&queries),
        OutputFormat::Table => {
            output::print_kv("Folder query", &queries.folder_query);
            output::print_kv("File query", &queries.file_query);
        }
    }

    Ok(())
}
