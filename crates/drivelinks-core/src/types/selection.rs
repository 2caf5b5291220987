//! The user's persisted folder selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::FolderId;

/// Chosen folders mapped to the path label captured at selection time.
///
/// Labels are display-only and may be stale; the folder ids are what scope
/// the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderSelection(pub BTreeMap<FolderId, String>);

impl FolderSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or relabel a folder.
    pub fn insert(&mut self, id: FolderId, label: impl Into<String>) {
        self.0.insert(id, label.into());
    }

    /// Remove a folder, returning its label if it was selected.
    pub fn remove(&mut self, id: &FolderId) -> Option<String> {
        self.0.remove(id)
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected folders.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Selected folder ids in id order.
    pub fn folder_ids(&self) -> impl Iterator<Item = &FolderId> {
        self.0.keys()
    }

    /// `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&FolderId, &String)> {
        self.0.iter()
    }
}
