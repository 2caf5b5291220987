//! Sharing permissions attached to a listed item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission id the listing API uses for public access.
pub const ANYONE: &str = "anyone";

/// Permission id the listing API uses for link-based public access.
pub const ANYONE_WITH_LINK: &str = "anyoneWithLink";

/// Role granted by a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionRole {
    /// Item owner.
    Owner,
    /// Shared drive organizer.
    Organizer,
    /// Shared drive file organizer.
    FileOrganizer,
    /// Can edit.
    Writer,
    /// Can comment.
    Commenter,
    /// Read-only.
    Reader,
    /// Any role this crate does not know about.
    #[serde(other)]
    Other,
}

impl PermissionRole {
    /// Return the role as the listing API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Organizer => "organizer",
            Self::FileOrganizer => "fileOrganizer",
            Self::Writer => "writer",
            Self::Commenter => "commenter",
            Self::Reader => "reader",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PermissionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One collaborator entry on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Permission id.
    pub id: String,
    /// Collaborator contact (absent for domain or public grants).
    #[serde(default)]
    pub email_address: Option<String>,
    /// Granted role.
    pub role: PermissionRole,
}

/// An owner of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Owner contact.
    #[serde(default)]
    pub email_address: Option<String>,
    /// Id of the owner's permission entry.
    #[serde(default)]
    pub permission_id: Option<String>,
}

/// Whether a permission id grants public access.
pub fn is_public_id(id: &str) -> bool {
    id == ANYONE || id == ANYONE_WITH_LINK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_deserializes_as_other() {
        let p: Permission =
            serde_json::from_str(r#"{"id":"1","role":"publishedReader"}"#).unwrap();
        assert_eq!(p.role, PermissionRole::Other);
        assert_eq!(p.email_address, None);
    }

    #[test]
    fn test_public_ids() {
        assert!(is_public_id("anyone"));
        assert!(is_public_id("anyoneWithLink"));
        assert!(!is_public_id("0123456789"));
    }
}
