//! Folder path resolution.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use drivelinks_core::error::AppError;
use drivelinks_core::types::FolderId;

use super::index::FolderIndex;

/// Root label for folders the principal owns.
pub const MY_DRIVE_LABEL: &str = "My Drive > ";

/// Root label for folders shared with the principal.
pub const SHARED_WITH_ME_LABEL: &str = "Shared with me > ";

/// Separator between path segments.
pub const SEGMENT_SEPARATOR: &str = " > ";

/// A materialized folder path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPath {
    /// Path text, root label first.
    pub text: String,
    /// The walk stopped at an ancestor missing from the index.
    pub partial: bool,
}

impl ResolvedPath {
    fn complete(text: String) -> Self {
        Self {
            text,
            partial: false,
        }
    }

    fn truncated(text: String) -> Self {
        Self {
            text,
            partial: true,
        }
    }
}

/// Root label for the given ownership.
pub fn root_label(owned: bool) -> &'static str {
    if owned {
        MY_DRIVE_LABEL
    } else {
        SHARED_WITH_ME_LABEL
    }
}

/// Walks parent pointers of a [`FolderIndex`] up to the root.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    index: &'a FolderIndex,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver over an index snapshot.
    pub fn new(index: &'a FolderIndex) -> Self {
        Self { index }
    }

    /// Resolve the path of `anchor`.
    ///
    /// `owned` picks the root label when the anchor is unknown and forces
    /// the "My Drive" label otherwise. An ancestor missing from the index
    /// yields a truncated path ending in `" >"`; a folder reached twice is
    /// reported as `CycleDetected`.
    pub fn resolve(&self, anchor: &FolderId, owned: bool) -> Result<ResolvedPath, AppError> {
        let Some(first) = self.index.get(anchor) else {
            return Ok(ResolvedPath::complete(root_label(owned).to_string()));
        };

        let label = root_label(owned || first.owned_by_me);
        let mut segments = vec![first.title.as_str()];
        let mut visited = HashSet::from([&first.id]);
        let mut current = first;

        loop {
            let Some(parent_id) = current.parent_id.as_ref() else {
                return Ok(ResolvedPath::complete(compose(label, &segments)));
            };

            let Some(parent) = self.index.get(parent_id) else {
                return Ok(ResolvedPath::truncated(format!(
                    "{} >",
                    compose(label, &segments)
                )));
            };

            if !visited.insert(&parent.id) {
                return Err(AppError::cycle_detected(format!(
                    "Folder '{}' is its own ancestor while resolving the path of '{}'",
                    parent.id, anchor
                )));
            }

            segments.push(parent.title.as_str());
            current = parent;
        }
    }

    /// Resolve the path text only.
    pub fn resolve_text(&self, anchor: &FolderId, owned: bool) -> Result<String, AppError> {
        self.resolve(anchor, owned).map(|path| path.text)
    }
}

/// Join leaf-first segments root-first behind the label.
fn compose(label: &str, leaf_first: &[&str]) -> String {
    let mut text = String::from(label);
    for (i, segment) in leaf_first.iter().rev().enumerate() {
        if i > 0 {
            text.push_str(SEGMENT_SEPARATOR);
        }
        text.push_str(segment);
    }
    text
}
