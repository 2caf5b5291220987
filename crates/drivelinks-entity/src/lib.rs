//! # drivelinks-entity
//!
//! Entity models for DriveLinks: the items returned by the listing API and
//! the records the index and report are built from. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod file;
pub mod folder;
pub mod item;
pub mod mime;
pub mod permission;

pub use file::{FileEntry, FileRow};
pub use folder::{FolderBucket, FolderKey, FolderRecord};
pub use item::{Item, ItemLabels, ParentRef};
pub use permission::{Owner, Permission, PermissionRole};
