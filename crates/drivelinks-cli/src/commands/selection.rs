//! Folder selection CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use drivelinks_core::error::AppError;
use drivelinks_core::types::{FolderId, FolderSelection};
use drivelinks_service::{ReportPipeline, SelectionService};

use super::ScopeArgs;

/// Arguments for selection commands
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Selection subcommand
    #[command(subcommand)]
    pub command: SelectionCommand,
}

/// Selection subcommands
#[derive(Debug, Subcommand)]
pub enum SelectionCommand {
    /// List the selected folders
    Show,
    /// Select folders
    Add {
        /// Folder IDs
        #[arg(required = true)]
        folder_ids: Vec<String>,
        /// Listing and scope flags
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Deselect a folder
    Remove {
        /// Folder ID
        folder_id: String,
    },
    /// Clear the whole selection
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Selection display row
#[derive(Debug, Serialize, Tabled)]
struct SelectionRow {
    /// Folder ID
    id: String,
    /// Path label captured when the folder was picked
    path: String,
}

fn print_selection(selection: &FolderSelection, format: OutputFormat) {
    let rows: Vec<SelectionRow> = selection
        .iter()
        .map(|(id, label)| SelectionRow {
            id: id.to_string(),
            path: label.clone(),
        })
        .collect();
    output::print_list(&rows, format);
}

/// Execute selection commands
pub fn execute(
    args: &SelectionArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let mut service = SelectionService::new(super::open_selection(&config));

    match &args.command {
        SelectionCommand::Show => {
            print_selection(&service.current()?, format);
        }
        SelectionCommand::Add { folder_ids, scope } => {
            let options = scope.options(&config)?;
            let listing = scope.open_listing(&config)?;
            let index = ReportPipeline::new(listing).index_folders(&options)?;

            let ids: Vec<FolderId> = folder_ids.iter().map(|id| FolderId::new(id.as_str())).collect();
            let selection = service.pick(&index, &ids)?;

            output::print_success(&format!("{} folder(s) selected", ids.len()));
            print_selection(&selection, format);
        }
        SelectionCommand::Remove { folder_id } => {
            let selection = service.remove(&FolderId::new(folder_id.as_str()))?;
            output::print_success(&format!("Folder '{folder_id}' removed from selection"));
            print_selection(&selection, format);
        }
        SelectionCommand::Reset { yes } => {
            if !yes {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("Forget every selected folder?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            service.reset()?;
            output::print_success("Folder selection cleared");
        }
    }

    Ok(())
}
