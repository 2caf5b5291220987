//! Cursor-driven listing: the drain loop and a local fixture source.

pub mod drain;
pub mod fixture;

pub use drain::{DrainStats, drain};
pub use fixture::FixtureListing;
