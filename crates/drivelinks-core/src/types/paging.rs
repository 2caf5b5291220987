//! Cursor pagination types for the listing API.

use serde::{Deserialize, Serialize};

/// Largest page the listing API serves.
pub const MAX_PAGE_SIZE: u32 = 100;

/// One request against the listing API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    /// Query predicate.
    pub query: String,
    /// Field selector naming the item fields to return.
    pub fields: String,
    /// Maximum items in the page.
    pub page_size: u32,
    /// Continuation token from the previous page.
    pub page_token: Option<String>,
}

impl ListRequest {
    /// Create a request for the first page.
    pub fn new(query: impl Into<String>, fields: impl Into<String>, page_size: u32) -> Self {
        Self {
            query: query.into(),
            fields: fields.into(),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            page_token: None,
        }
    }

    /// The field selector with the continuation token appended, as the
    /// listing API expects it.
    pub fn fields_with_token(&self) -> String {
        format!("{},nextPageToken", self.fields)
    }
}

/// A page of listing results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Token for the next page; `None` once the listing is exhausted.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl<T> ListPage<T> {
    /// Whether this is the final page.
    pub fn is_last(&self) -> bool {
        self.next_page_token.is_none()
    }
}
