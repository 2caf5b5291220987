//! MIME types the report treats specially.

/// MIME type of a folder.
pub const FOLDER: &str = "application/vnd.google-apps.folder";

/// Native text document.
pub const DOCUMENT: &str = "application/vnd.google-apps.document";

/// Native spreadsheet.
pub const SPREADSHEET: &str = "application/vnd.google-apps.spreadsheet";

/// Native presentation.
pub const PRESENTATION: &str = "application/vnd.google-apps.presentation";
