//! Shared test helpers for integration tests.

#![allow(dead_code)]

use drivelinks_core::types::FolderId;
use drivelinks_entity::folder::FolderBucket;
use drivelinks_service::{FixtureListing, FolderScope, PipelineOptions, Report, ReportPipeline};

/// Path of the sample drive listing.
pub const DRIVE_FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/integration/fixtures/drive.json"
);

/// The sample drive listing.
pub fn listing() -> FixtureListing {
    FixtureListing::from_path(DRIVE_FIXTURE).expect("fixture should load")
}

/// Options with a small page size so every run spans several pages.
pub fn options(include_shared: bool, folder_scope: FolderScope, recursive: bool) -> PipelineOptions {
    PipelineOptions {
        include_shared,
        folder_scope,
        recursive,
        page_size: 3,
    }
}

/// A custom scope over the given folder ids.
pub fn custom(ids: &[&str]) -> FolderScope {
    FolderScope::Custom(ids.iter().map(|id| FolderId::new(*id)).collect())
}

/// Run the pipeline over the sample drive and expect a report.
pub fn run(options: &PipelineOptions) -> Report {
    ReportPipeline::new(listing())
        .run(options)
        .expect("pipeline should run")
        .report()
        .cloned()
        .expect("sample drive has files")
}

/// The bucket of a folder id.
pub fn bucket<'a>(report: &'a Report, folder_id: &str) -> &'a FolderBucket {
    report
        .buckets
        .iter()
        .find(|b| b.key.id.as_str() == folder_id)
        .unwrap_or_else(|| panic!("no bucket for {folder_id}"))
}

/// File ids of a bucket in row order.
pub fn file_ids(bucket: &FolderBucket) -> Vec<&str> {
    bucket.files.iter().map(|f| f.id.as_str()).collect()
}
