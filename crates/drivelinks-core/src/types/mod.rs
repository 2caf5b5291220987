//! Core type definitions used across the DriveLinks workspace.

pub mod id;
pub mod paging;
pub mod selection;

pub use id::*;
pub use paging::{ListPage, ListRequest, MAX_PAGE_SIZE};
pub use selection::FolderSelection;
