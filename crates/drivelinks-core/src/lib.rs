//! # drivelinks-core
//!
//! Core crate for DriveLinks. Contains the collaborator traits, configuration
//! schemas, typed identifiers, paging types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DriveLinks crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
