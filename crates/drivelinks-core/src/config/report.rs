//! Report scope and sheet layout preferences.

use serde::{Deserialize, Serialize};

/// Preferences that shape which files end up in the report and how the
/// rows are laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include items shared with the current principal, not only owned ones.
    #[serde(default)]
    pub include_shared: bool,
    /// Ignore the stored folder selection and report every folder.
    #[serde(default = "default_true")]
    pub all_folders: bool,
    /// Apply the folder selection to all descendants.
    #[serde(default)]
    pub recursive: bool,
    /// Repeat the folder name and path on every row of a bucket.
    #[serde(default)]
    pub repeat_folder_names: bool,
    /// Add a dedicated folder link column.
    #[serde(default)]
    pub display_folder_links: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_shared: false,
            all_folders: true,
            recursive: false,
            repeat_folder_names: false,
            display_folder_links: false,
        }
    }
}

fn default_true() -> bool {
    true
}
