//! Pagination loop over a [`ListingSource`].

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use drivelinks_core::error::AppError;
use drivelinks_core::traits::ListingSource;
use drivelinks_core::types::ListRequest;

/// Counters of one drained listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DrainStats {
    /// Pages fetched.
    pub pages: usize,
    /// Items handed to the visitor.
    pub items: usize,
}

/// Fetch every page of `query` and hand each item to `visit`.
///
/// Pages are requested one after the other until the source stops returning
/// a continuation token. The first error from `visit` ends the drain before
/// the next item or page. A source that hands back a token it already issued
/// fails with a listing error instead of looping forever.
pub fn drain<S, F>(
    source: &mut S,
    query: &str,
    fields: &str,
    page_size: u32,
    mut visit: F,
) -> Result<DrainStats, AppError>
where
    S: ListingSource + ?Sized,
    F: FnMut(S::Item) -> Result<(), AppError>,
{
    let mut request = ListRequest::new(query, fields, page_size);
    let mut seen_tokens = HashSet::new();
    let mut stats = DrainStats::default();

    loop {
        let page = source.list_page(&request)?;
        stats.pages += 1;

        let count = page.items.len();
        for item in page.items {
            visit(item)?;
            stats.items += 1;
        }
        debug!(page = stats.pages, items = count, "Fetched listing page");

        match page.next_page_token {
            Some(token) => {
                if !seen_tokens.insert(token.clone()) {
                    return Err(AppError::listing(format!(
                        "Listing returned page token '{token}' twice"
                    )));
                }
                request.page_token = Some(token);
            }
            None => break,
        }
    }

    Ok(stats)
}
