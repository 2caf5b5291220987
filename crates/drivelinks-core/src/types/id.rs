//! Newtype wrappers around the opaque string identifiers handed out by the
//! listing API.
//!
//! Using distinct types prevents accidentally passing an `ItemId` where a
//! `FolderId` is expected.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a folder.
    FolderId
);

define_id!(
    /// Identifier of any listed item (file or folder).
    ItemId
);

/// Alias the listing API accepts for the principal's root folder.
pub const ROOT_FOLDER_ALIAS: &str = "root";

impl FolderId {
    /// The implicit root folder.
    pub fn root() -> Self {
        Self::new(ROOT_FOLDER_ALIAS)
    }
}

impl From<ItemId> for FolderId {
    fn from(id: ItemId) -> Self {
        Self(id.0)
    }
}
