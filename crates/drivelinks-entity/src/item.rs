//! Items as returned by the listing API.

use serde::{Deserialize, Serialize};

use drivelinks_core::error::AppError;
use drivelinks_core::types::{FolderId, ItemId};

use crate::permission::{Owner, Permission};

/// A reference from an item to one of its parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRef {
    /// Parent folder id.
    pub id: FolderId,
    /// Whether the parent is the principal's root folder.
    #[serde(default)]
    pub is_root: bool,
}

impl ParentRef {
    /// A non-root parent.
    pub fn folder(id: impl Into<FolderId>) -> Self {
        Self {
            id: id.into(),
            is_root: false,
        }
    }

    /// The root parent with the given id.
    pub fn root(id: impl Into<FolderId>) -> Self {
        Self {
            id: id.into(),
            is_root: true,
        }
    }
}

/// Boolean labels attached to an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLabels {
    /// Viewers cannot download, print or copy.
    #[serde(default)]
    pub restricted: bool,
    /// The item is in the trash.
    #[serde(default)]
    pub trashed: bool,
}

/// One listed file or folder.
///
/// Every field is optional on the wire; the listing only returns the fields
/// named in the request's field selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item id.
    #[serde(default)]
    pub id: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Whether the current principal owns the item.
    #[serde(default)]
    pub owned_by_me: bool,
    /// Parent folders, canonical parent first.
    #[serde(default)]
    pub parents: Vec<ParentRef>,
    /// MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Ids of every permission on the item.
    #[serde(default)]
    pub permission_ids: Vec<String>,
    /// Permission entries.
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Labels.
    #[serde(default)]
    pub labels: ItemLabels,
    /// Owners.
    #[serde(default)]
    pub owners: Vec<Owner>,
    /// Download link for binary content.
    #[serde(default)]
    pub web_content_link: Option<String>,
}

impl Item {
    /// The item's identity, or `InvalidRecord` when it has none.
    pub fn identity(&self) -> Result<ItemId, AppError> {
        match self.id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(ItemId::new(id)),
            _ => Err(AppError::invalid_record(format!(
                "listing item '{}' has no id",
                self.title()
            ))),
        }
    }

    /// Display title, empty when absent.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// The canonical (first) parent.
    pub fn first_parent(&self) -> Option<&ParentRef> {
        self.parents.first()
    }

    /// Permission id of the first owner, if known.
    pub fn owner_permission_id(&self) -> Option<&str> {
        self.owners
            .first()
            .and_then(|owner| owner.permission_id.as_deref())
    }
}
