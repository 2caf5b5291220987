//! The user's folder selection: persistence and editing.

pub mod service;
pub mod store;

pub use service::SelectionService;
pub use store::{JsonFileSelectionStore, MemorySelectionStore};
