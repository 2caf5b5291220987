//! Path CLI command.

use clap::Args;

use crate::output::{self, OutputFormat};
use drivelinks_core::error::AppError;
use drivelinks_core::types::FolderId;
use drivelinks_service::{PathResolver, ReportPipeline};

use super::ScopeArgs;

/// Arguments for the path command
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Folder ID
    pub folder_id: String,

    /// Use the "My Drive" label even for folders shared with you
    #[arg(long)]
    pub owned: bool,

    /// Listing and scope flags
    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// Execute the path command
pub fn execute(args: &PathArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let options = args.scope.options(&config)?;
    let listing = args.scope.open_listing(&config)?;

    let index = ReportPipeline::new(listing).index_folders(&options)?;
    let folder_id = FolderId::new(args.folder_id.as_str());
    if !index.contains(&folder_id) {
        output::print_warning(&format!("Folder '{folder_id}' is not in the listing"));
    }

    let path = PathResolver::new(&index).resolve(&folder_id, args.owned)?;

    match format {
        OutputFormat::Json => output::print_json(&path),
        OutputFormat::Table => {
            output::print_kv("Folder", folder_id.as_str());
            output::print_kv("Path", &path.text);
            if path.partial {
                output::print_kv("Note", "an ancestor is not visible to you");
            }
        }
    }

    Ok(())
}
