//! Direct-link derivation.

use drivelinks_core::types::ItemId;
use drivelinks_entity::item::Item;
use drivelinks_entity::mime;

/// Placeholder for items with no downloadable representation.
pub const NOT_APPLICABLE: &str = "Not applicable";

const DOCS_BASE_URL: &str = "https://docs.google.com";

/// Direct download or export link of a file.
///
/// Native documents and spreadsheets export through `/export?format=pdf`,
/// presentations through `/export/pdf`. Anything else uses the item's
/// content link when it has one.
pub fn direct_link(item: &Item, id: &ItemId) -> String {
    let export = match item.mime_type.as_deref() {
        Some(mime::DOCUMENT) => Some(("document", "/export?format=pdf")),
        Some(mime::SPREADSHEET) => Some(("spreadsheets", "/export?format=pdf")),
        Some(mime::PRESENTATION) => Some(("presentation", "/export/pdf")),
        _ => None,
    };

    match export {
        Some((kind, suffix)) => format!("{DOCS_BASE_URL}/{kind}/d/{id}{suffix}"),
        None => item
            .web_content_link
            .as_deref()
            .filter(|link| !link.is_empty())
            .unwrap_or(NOT_APPLICABLE)
            .to_string(),
    }
}
