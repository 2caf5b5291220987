//! File rows of the report.

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use drivelinks_core::types::{FolderId, ItemId};

/// Per-file data shared by every attribution of that file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File id.
    pub id: ItemId,
    /// File title.
    pub name: String,
    /// Whether the current principal owns the file.
    pub owned_by_me: bool,
    /// Direct download or export link.
    pub direct_link: String,
    /// Who the file is shared with.
    pub access_summary: String,
}

/// One attribution of a file to a folder.
///
/// The shared [`FileEntry`] is reference-counted, so a file with several
/// parents is computed once and attributed once per parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRow {
    /// Shared file data.
    #[serde(flatten)]
    pub entry: Arc<FileEntry>,
    /// Folder this attribution belongs to.
    pub folder_id: FolderId,
}

impl FileRow {
    /// Create an attribution.
    pub fn new(entry: Arc<FileEntry>, folder_id: FolderId) -> Self {
        Self { entry, folder_id }
    }

    /// Whether two rows share the same underlying entry.
    pub fn shares_entry_with(&self, other: &FileRow) -> bool {
        Arc::ptr_eq(&self.entry, &other.entry)
    }
}

impl Deref for FileRow {
    type Target = FileEntry;

    fn deref(&self) -> &Self::Target {
        &self.entry
    }
}
