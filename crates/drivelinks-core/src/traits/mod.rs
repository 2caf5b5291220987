//! Collaborator traits implemented outside the core.

pub mod listing;
pub mod selection;

pub use listing::ListingSource;
pub use selection::SelectionStore;
