//! Editing the stored folder selection.

use tracing::info;

use drivelinks_core::error::AppError;
use drivelinks_core::traits::SelectionStore;
use drivelinks_core::types::{FolderId, FolderSelection};

use crate::folder::{FolderIndex, PathResolver};
use crate::query::FolderScope;

/// Reads and edits the selection held by a [`SelectionStore`].
#[derive(Debug)]
pub struct SelectionService<S> {
    store: S,
}

impl<S: SelectionStore> SelectionService<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored selection.
    pub fn current(&self) -> Result<FolderSelection, AppError> {
        self.store.load()
    }

    /// Add folders to the selection, labelling each with its resolved path.
    ///
    /// Fails with `NotFound` when a folder is not in the index; nothing is
    /// saved in that case.
    pub fn pick(
        &mut self,
        index: &FolderIndex,
        folders: &[FolderId],
    ) -> Result<FolderSelection, AppError> {
        let resolver = PathResolver::new(index);
        let mut selection = self.store.load()?;

        for id in folders {
            if !index.contains(id) {
                return Err(AppError::not_found(format!("Folder '{id}' is not indexed")));
            }
            let label = resolver.resolve_text(id, false)?;
            selection.insert(id.clone(), label);
        }

        self.store.save(&selection)?;
        info!(added = folders.len(), total = selection.len(), "Folder selection updated");
        Ok(selection)
    }

    /// Drop one folder from the selection.
    pub fn remove(&mut self, id: &FolderId) -> Result<FolderSelection, AppError> {
        let mut selection = self.store.load()?;
        if selection.remove(id).is_none() {
            return Err(AppError::not_found(format!("Folder '{id}' is not selected")));
        }
        self.store.save(&selection)?;
        info!(folder_id = %id, total = selection.len(), "Folder removed from selection");
        Ok(selection)
    }

    /// Forget the whole selection.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.store.clear()?;
        info!("Folder selection reset");
        Ok(())
    }

    /// Report scope implied by the stored selection.
    pub fn folder_scope(&self) -> Result<FolderScope, AppError> {
        Ok(FolderScope::from_selection(&self.store.load()?))
    }

    /// Give back the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
