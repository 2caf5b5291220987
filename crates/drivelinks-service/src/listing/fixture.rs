//! In-memory listing source backed by a JSON document.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use drivelinks_core::error::{AppError, ErrorKind};
use drivelinks_core::traits::ListingSource;
use drivelinks_core::types::{ListPage, ListRequest};
use drivelinks_entity::item::Item;

use crate::query::Predicate;

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureDocument {
    Wrapped { items: Vec<Item> },
    Bare(Vec<Item>),
}

/// Serves a fixed item list the way the listing API would.
///
/// Each request's query is parsed and evaluated against every item;
/// matching items are paginated with numeric offset tokens.
#[derive(Debug, Clone, Default)]
pub struct FixtureListing {
    items: Vec<Item>,
    requests: Vec<ListRequest>,
    compiled: HashMap<String, Predicate>,
}

impl FixtureListing {
    /// Create a source over the given items.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Parse a fixture document: `{"items": [...]}` or a bare array.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let document: FixtureDocument = serde_json::from_str(json)?;
        let items = match document {
            FixtureDocument::Wrapped { items } | FixtureDocument::Bare(items) => items,
        };
        Ok(Self::new(items))
    }

    /// Read a fixture document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Listing,
                format!("Failed to read listing fixture {}", path.display()),
                e,
            )
        })?;
        let listing = Self::from_json_str(&json)?;
        info!(path = %path.display(), items = listing.items.len(), "Loaded listing fixture");
        Ok(listing)
    }

    /// Every item in the fixture.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> &[ListRequest] {
        &self.requests
    }
}

impl ListingSource for FixtureListing {
    type Item = Item;

    fn list_page(&mut self, request: &ListRequest) -> Result<ListPage<Item>, AppError> {
        self.requests.push(request.clone());

        if !self.compiled.contains_key(&request.query) {
            let predicate = Predicate::parse(&request.query)?;
            self.compiled.insert(request.query.clone(), predicate);
        }
        let Some(predicate) = self.compiled.get(&request.query) else {
            return Err(AppError::internal("Compiled query vanished"));
        };

        let offset = match request.page_token.as_deref() {
            None => 0,
            Some(token) => token.parse::<usize>().map_err(|_| {
                AppError::listing(format!("Invalid page token '{token}'"))
            })?,
        };
        let page_size = request.page_size.max(1) as usize;

        let matching: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| predicate.matches(item))
            .collect();
        let end = offset.saturating_add(page_size).min(matching.len());
        let items = matching
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|item| (*item).clone())
            .collect();

        Ok(ListPage {
            items,
            next_page_token: (end < matching.len()).then(|| end.to_string()),
        })
    }
}
