//! Selection store implementations.

use std::path::{Path, PathBuf};

use drivelinks_core::result::AppResult;
use drivelinks_core::traits::SelectionStore;
use drivelinks_core::types::FolderSelection;

use crate::persist;

/// Selection kept in a JSON file shaped `{"<folderId>": "<label>"}`.
#[derive(Debug, Clone)]
pub struct JsonFileSelectionStore {
    path: PathBuf,
}

impl JsonFileSelectionStore {
    /// Create a store backed by `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for JsonFileSelectionStore {
    fn load(&self) -> AppResult<FolderSelection> {
        Ok(persist::read_json(&self.path)?.unwrap_or_default())
    }

    fn save(&mut self, selection: &FolderSelection) -> AppResult<()> {
        persist::write_json(&self.path, selection, true)
    }

    fn clear(&mut self) -> AppResult<()> {
        persist::remove(&self.path)
    }
}

/// Selection held in memory for the lifetime of the store.
#[derive(Debug, Clone, Default)]
pub struct MemorySelectionStore {
    selection: FolderSelection,
}

impl MemorySelectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load(&self) -> AppResult<FolderSelection> {
        Ok(self.selection.clone())
    }

    fn save(&mut self, selection: &FolderSelection) -> AppResult<()> {
        self.selection = selection.clone();
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.selection = FolderSelection::new();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivelinks_core::error::ErrorKind;
    use drivelinks_core::types::FolderId;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSelectionStore::new(dir.path().join("selection.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("selection.json");
        let mut store = JsonFileSelectionStore::new(&path);

        let mut selection = FolderSelection::new();
        selection.insert(FolderId::new("f1"), "My Drive > Reports");
        store.save(&selection).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"f1\": \"My Drive > Reports\""));
        assert_eq!(store.load().unwrap(), selection);

        store.clear().unwrap();
        assert!(!path.exists());
        assert!(store.load().unwrap().is_empty());
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileSelectionStore::new(&path).load().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemorySelectionStore::new();
        let mut selection = FolderSelection::new();
        selection.insert(FolderId::new("f1"), "x");
        store.save(&selection).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
