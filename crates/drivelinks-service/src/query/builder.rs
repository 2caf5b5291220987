//! Query string construction for the listing API.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use drivelinks_core::error::AppError;
use drivelinks_core::types::{FolderId, FolderSelection};
use drivelinks_entity::mime;

use crate::folder::{FolderIndex, PathResolver, expand};

/// Which kind of object a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Folders only.
    FoldersOnly,
    /// Everything except folders.
    FilesOnly,
}

/// Which folders a query is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderScope {
    /// No folder restriction.
    All,
    /// Only items directly inside these folders.
    Custom(BTreeSet<FolderId>),
}

impl FolderScope {
    /// Scope derived from a stored selection; an empty selection means all
    /// folders.
    pub fn from_selection(selection: &FolderSelection) -> Self {
        if selection.is_empty() {
            Self::All
        } else {
            Self::Custom(selection.folder_ids().cloned().collect())
        }
    }
}

/// Filter intent for one listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryScope {
    /// Restrict to items owned by the current principal.
    pub ownership_only: bool,
    /// Include items shared with the current principal.
    pub include_shared: bool,
    /// Object type filter.
    pub target: TargetType,
    /// Folder restriction.
    pub folder_scope: FolderScope,
    /// Extend a custom folder scope to all descendants.
    pub recursive: bool,
}

impl QueryScope {
    /// Scope of the folder-index query.
    pub fn folders(include_shared: bool) -> Self {
        Self {
            ownership_only: false,
            include_shared,
            target: TargetType::FoldersOnly,
            folder_scope: FolderScope::All,
            recursive: false,
        }
    }

    /// Scope of the report query.
    pub fn files(include_shared: bool, folder_scope: FolderScope, recursive: bool) -> Self {
        Self {
            ownership_only: false,
            include_shared,
            target: TargetType::FilesOnly,
            folder_scope,
            recursive,
        }
    }
}

/// Turns a [`QueryScope`] into the listing API's query grammar.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    index: &'a FolderIndex,
}

impl<'a> QueryBuilder<'a> {
    /// Create a builder over an index snapshot.
    pub fn new(index: &'a FolderIndex) -> Self {
        Self { index }
    }

    /// Build the query string.
    ///
    /// Custom folder clauses are ordered by resolved folder path so the same
    /// selection always produces the same text.
    pub fn build(&self, scope: &QueryScope) -> Result<String, AppError> {
        let mut query = String::from("trashed = false");

        if scope.ownership_only || !scope.include_shared {
            query.push_str(" and \"me\" in owners");
        }

        if let FolderScope::Custom(selected) = &scope.folder_scope {
            if selected.is_empty() {
                return Err(AppError::validation(
                    "Custom folder scope must name at least one folder",
                ));
            }

            let folder_ids = if scope.recursive {
                expand(self.index, selected)
            } else {
                selected.clone()
            };

            let ordered = self.order_by_path(folder_ids)?;
            debug!(folders = ordered.len(), "Scoping query to custom folders");

            query.push_str(" and (");
            for (i, id) in ordered.iter().enumerate() {
                if i > 0 {
                    query.push_str(" or ");
                }
                query.push('"');
                query.push_str(id.as_str());
                query.push_str("\" in parents");
            }
            query.push(')');
        }

        query.push_str(" and mimeType");
        query.push_str(match scope.target {
            TargetType::FoldersOnly => "=",
            TargetType::FilesOnly => "!=",
        });
        query.push('"');
        query.push_str(mime::FOLDER);
        query.push('"');

        Ok(query)
    }

    fn order_by_path(&self, ids: BTreeSet<FolderId>) -> Result<Vec<FolderId>, AppError> {
        let resolver = PathResolver::new(self.index);
        let mut keyed = ids
            .into_iter()
            .map(|id| resolver.resolve_text(&id, false).map(|path| (path, id)))
            .collect::<Result<Vec<_>, _>>()?;
        keyed.sort();
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }
}
