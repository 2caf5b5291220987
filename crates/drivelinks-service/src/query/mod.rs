//! Listing query construction and evaluation.

pub mod builder;
pub mod fields;
pub mod predicate;

pub use builder::{FolderScope, QueryBuilder, QueryScope, TargetType};
pub use predicate::Predicate;
