//! Listing source configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::paging::MAX_PAGE_SIZE;

/// Listing source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// JSON document served by the fixture listing source.
    #[serde(default)]
    pub source: Option<String>,
    /// Items requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            source: None,
            page_size: default_page_size(),
        }
    }
}

impl ListingConfig {
    /// Reject page sizes the listing API would refuse.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(AppError::configuration(format!(
                "listing.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }
}

fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}
