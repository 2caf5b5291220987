//! Folder records and report buckets.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use drivelinks_core::types::FolderId;

use crate::file::{FileEntry, FileRow};

/// Display name of the principal's root folder.
pub const ROOT_FOLDER_NAME: &str = "My Drive";

/// Display name of the bucket holding unparented files shared with the
/// principal.
pub const SHARED_FOLDER_NAME: &str = "Shared with me";

/// Pseudo folder id of the shared bucket.
pub const SHARED_FOLDER_ID: &str = "shared-with-me";

/// Metadata of one folder in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    /// Folder id.
    pub id: FolderId,
    /// Folder title.
    pub title: String,
    /// Canonical parent; `None` when the folder hangs off the root or has no
    /// parents at all.
    pub parent_id: Option<FolderId>,
    /// Whether the current principal owns the folder.
    pub owned_by_me: bool,
}

impl FolderRecord {
    /// Whether the walk to the root ends at this folder.
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Identity of a report bucket.
///
/// Same-named folders under different parents get distinct keys through the
/// id component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FolderKey {
    /// Folder name at attribution time (empty when the folder is unknown).
    pub name: String,
    /// Folder id.
    pub id: FolderId,
}

impl FolderKey {
    /// Create a key.
    pub fn new(name: impl Into<String>, id: FolderId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Key of the implicit root bucket.
    pub fn root() -> Self {
        Self::new(ROOT_FOLDER_NAME, FolderId::root())
    }

    /// Key of the bucket for shared files without a visible parent.
    pub fn shared_with_me() -> Self {
        Self::new(SHARED_FOLDER_NAME, FolderId::new(SHARED_FOLDER_ID))
    }
}

/// Files attributed to one folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderBucket {
    /// Bucket identity.
    pub key: FolderKey,
    /// Resolved folder path.
    pub path: String,
    /// Whether the path stopped at an inaccessible ancestor.
    pub partial_path: bool,
    /// Attributed rows in ingestion order.
    pub files: Vec<FileRow>,
}

impl FolderBucket {
    /// Create an empty bucket.
    pub fn new(key: FolderKey, path: impl Into<String>, partial_path: bool) -> Self {
        Self {
            key,
            path: path.into(),
            partial_path,
            files: Vec::new(),
        }
    }

    /// Append an attribution of `entry` to `folder_id`.
    pub fn push(&mut self, entry: Arc<FileEntry>, folder_id: FolderId) {
        self.files.push(FileRow::new(entry, folder_id));
    }

    /// Whether no file was attributed to this bucket.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Report ordering: by path, then by key for equal paths.
    pub fn report_order(&self, other: &Self) -> Ordering {
        self.path
            .cmp(&other.path)
            .then_with(|| self.key.cmp(&other.key))
    }
}
