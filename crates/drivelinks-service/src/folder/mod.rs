//! Folder hierarchy: index, path resolution, and descendant expansion.

pub mod expand;
pub mod index;
pub mod path;

pub use expand::expand;
pub use index::FolderIndex;
pub use path::{PathResolver, ResolvedPath};
