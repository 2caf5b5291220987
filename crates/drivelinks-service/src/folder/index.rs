//! In-memory folder index built from the folder listing.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use drivelinks_core::error::AppError;
use drivelinks_core::types::FolderId;
use drivelinks_entity::folder::FolderRecord;
use drivelinks_entity::item::Item;

/// Folder metadata keyed by id, plus the parent→children adjacency.
///
/// Records are first-write-wins: a folder id seen again on a later page is
/// ignored entirely, adjacency included.
#[derive(Debug, Default, Clone)]
pub struct FolderIndex {
    /// Folder records by id.
    records: HashMap<FolderId, FolderRecord>,
    /// Child folder ids by parent id, over every parent of each folder.
    children: HashMap<FolderId, BTreeSet<FolderId>>,
    /// Ids the listing flagged as the principal's root.
    root_ids: BTreeSet<FolderId>,
}

impl FolderIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one folder item.
    ///
    /// Returns `true` when the folder was new. Items without an id fail with
    /// `InvalidRecord` and leave the index untouched.
    pub fn ingest(&mut self, item: &Item) -> Result<bool, AppError> {
        let id = FolderId::from(item.identity()?);

        if self.records.contains_key(&id) {
            debug!(folder_id = %id, "Folder already indexed, ignoring duplicate");
            return Ok(false);
        }

        let parent_id = item
            .first_parent()
            .filter(|parent| !parent.is_root)
            .map(|parent| parent.id.clone());

        for parent in &item.parents {
            if parent.is_root {
                self.root_ids.insert(parent.id.clone());
            }
            self.children
                .entry(parent.id.clone())
                .or_default()
                .insert(id.clone());
        }

        self.records.insert(
            id.clone(),
            FolderRecord {
                id,
                title: item.title().to_string(),
                parent_id,
                owned_by_me: item.owned_by_me,
            },
        );

        Ok(true)
    }

    /// Record a batch of folder items, returning how many were new.
    ///
    /// Stops at the first invalid item.
    pub fn ingest_all<'a, I>(&mut self, items: I) -> Result<usize, AppError>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut added = 0;
        for item in items {
            if self.ingest(item)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Look up a folder.
    pub fn get(&self, id: &FolderId) -> Option<&FolderRecord> {
        self.records.get(id)
    }

    /// Whether the folder is indexed.
    pub fn contains(&self, id: &FolderId) -> bool {
        self.records.contains_key(id)
    }

    /// Direct children of a folder (empty when it has none).
    ///
    /// The root alias resolves to the children of every id the listing
    /// flagged as root.
    pub fn children(&self, id: &FolderId) -> BTreeSet<&FolderId> {
        let mut found: BTreeSet<&FolderId> = self
            .children
            .get(id)
            .map(|set| set.iter().collect())
            .unwrap_or_default();

        if *id == FolderId::root() {
            for root_id in &self.root_ids {
                if let Some(set) = self.children.get(root_id) {
                    found.extend(set.iter());
                }
            }
        }

        found
    }

    /// Ids the listing flagged as the principal's root folder.
    pub fn root_ids(&self) -> &BTreeSet<FolderId> {
        &self.root_ids
    }

    /// Every indexed folder id, in no particular order.
    pub fn folder_ids(&self) -> impl Iterator<Item = &FolderId> {
        self.records.keys()
    }

    /// Number of indexed folders.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no folder is indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
