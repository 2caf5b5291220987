//! Listing API trait.

use crate::result::AppResult;
use crate::types::paging::{ListPage, ListRequest};

/// A cursor-paginated listing API.
///
/// Each call is blocking and returns one page. Transport failures surface as
/// errors and are never retried by the caller.
pub trait ListingSource {
    /// The item type returned by the listing.
    type Item;

    /// Fetch the page described by `request`.
    fn list_page(&mut self, request: &ListRequest) -> AppResult<ListPage<Self::Item>>;
}

impl<S: ListingSource + ?Sized> ListingSource for &mut S {
    type Item = S::Item;

    fn list_page(&mut self, request: &ListRequest) -> AppResult<ListPage<Self::Item>> {
        (**self).list_page(request)
    }
}
