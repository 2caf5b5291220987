//! Selection persistence trait.

use crate::result::AppResult;
use crate::types::selection::FolderSelection;

/// Key-value store holding the user's folder selection across runs.
pub trait SelectionStore: std::fmt::Debug {
    /// Load the stored selection; an absent selection loads as empty.
    fn load(&self) -> AppResult<FolderSelection>;

    /// Replace the stored selection.
    fn save(&mut self, selection: &FolderSelection) -> AppResult<()>;

    /// Delete the stored selection.
    fn clear(&mut self) -> AppResult<()>;
}
