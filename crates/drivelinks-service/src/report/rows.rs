//! Flattening a report into spreadsheet rows.

use serde::{Deserialize, Serialize};

use drivelinks_core::config::report::ReportConfig;
use drivelinks_core::types::FolderId;
use drivelinks_entity::folder::{FolderBucket, FolderKey};

/// Argument separator inside `=hyperlink(...)` formulas.
pub const HYPERLINK_SEPARATOR: char = ';';

const FOLDER_URL_PREFIX: &str = "https://drive.google.com/drive/u/0/folders/";
const SHARED_WITH_ME_URL: &str = "https://drive.google.com/drive/u/0/shared-with-me";
const FILE_URL_PREFIX: &str = "https://drive.google.com/file/d/";

/// Background band of a row; alternates from one folder to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// `#fff` background.
    Light,
    /// `#ddd` background.
    Shaded,
}

impl Band {
    fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            Self::Light
        } else {
            Self::Shaded
        }
    }

    /// Background colour used by the sheet.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Light => "#fff",
            Self::Shaded => "#ddd",
        }
    }
}

/// Column layout preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Repeat the folder cells on every row instead of only the first.
    pub repeat_folder_names: bool,
    /// Add a plain folder URL column.
    pub display_folder_links: bool,
}

impl SheetLayout {
    /// Layout from the report section of the config.
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            repeat_folder_names: config.repeat_folder_names,
            display_folder_links: config.display_folder_links,
        }
    }

    /// Column titles for this layout.
    pub fn header(&self) -> Vec<String> {
        let mut header = vec!["Folder", "Folder Path"];
        if self.display_folder_links {
            header.push("Folder Link");
        }
        header.extend(["File", "Direct Link", "Shared With"]);
        header.into_iter().map(String::from).collect()
    }
}

/// One data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    /// Background band.
    pub band: Band,
    /// Cell values in header order.
    pub cells: Vec<String>,
}

/// Header plus data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRows {
    /// Column titles.
    pub header: Vec<String>,
    /// Data rows.
    pub rows: Vec<SheetRow>,
}

fn hyperlink(url: &str, label: &str) -> String {
    format!(
        "=hyperlink(\"{}\"{HYPERLINK_SEPARATOR}\"{}\")",
        url.replace('"', "\"\""),
        label.replace('"', "\"\"")
    )
}

fn folder_url(key: &FolderKey, folder_id: &FolderId) -> String {
    if *key == FolderKey::shared_with_me() {
        SHARED_WITH_ME_URL.to_string()
    } else {
        format!("{FOLDER_URL_PREFIX}{folder_id}")
    }
}

/// Flatten buckets into rows.
///
/// Empty buckets produce no rows and do not advance the band. The first
/// folder with rows is drawn on the shaded band, as if an empty root slot
/// had taken the light one, and bands alternate per folder from there.
pub fn build_rows<'a, I>(buckets: I, layout: SheetLayout) -> SheetRows
where
    I: IntoIterator<Item = &'a FolderBucket>,
{
    let mut rows = Vec::new();

    for (position, bucket) in buckets.into_iter().filter(|b| !b.is_empty()).enumerate() {
        let band = Band::for_position(position + 1);

        // The folder link points at the folder of the bucket's first row.
        let link = folder_url(&bucket.key, &bucket.files[0].folder_id);
        let name_cell = hyperlink(&link, &bucket.key.name);

        for (i, row) in bucket.files.iter().enumerate() {
            let show_folder = i == 0 || layout.repeat_folder_names;
            let mut cells = Vec::with_capacity(6);

            if show_folder {
                cells.push(name_cell.clone());
                cells.push(bucket.path.clone());
            } else {
                cells.push(String::new());
                cells.push(String::new());
            }
            if layout.display_folder_links {
                cells.push(if show_folder { link.clone() } else { String::new() });
            }

            let file_url = format!("{FILE_URL_PREFIX}{}/edit", row.id);
            cells.push(hyperlink(&file_url, &row.name));
            cells.push(row.direct_link.clone());
            cells.push(row.access_summary.clone());

            rows.push(SheetRow { band, cells });
        }
    }

    SheetRows {
        header: layout.header(),
        rows,
    }
}
