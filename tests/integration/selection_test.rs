//! Integration tests for the persisted folder selection.

mod helpers;

use drivelinks_core::config::listing::ListingConfig;
use drivelinks_core::config::report::ReportConfig;
use drivelinks_core::error::ErrorKind;
use drivelinks_core::traits::SelectionStore;
use drivelinks_core::types::FolderId;
use drivelinks_service::{
    FolderScope, JsonFileSelectionStore, PipelineOptions, ReportPipeline, SelectionService,
};

#[test]
fn test_pick_persists_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.json");
    let index = ReportPipeline::new(helpers::listing())
        .index_folders(&helpers::options(false, FolderScope::All, false))
        .unwrap();

    let mut service = SelectionService::new(JsonFileSelectionStore::new(&path));
    service
        .pick(&index, &[FolderId::new("fC"), FolderId::new("fE")])
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["fC"], "My Drive > Projects > 2024 > Invoices");
    assert_eq!(raw["fE"], "My Drive > Reports");

    // A fresh store over the same file sees the selection.
    let reopened = JsonFileSelectionStore::new(&path).load().unwrap();
    assert_eq!(reopened.len(), 2);
}

#[test]
fn test_selection_scopes_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.json");
    let index = ReportPipeline::new(helpers::listing())
        .index_folders(&helpers::options(false, FolderScope::All, false))
        .unwrap();

    let mut service = SelectionService::new(JsonFileSelectionStore::new(&path));
    let selection = service
        .pick(&index, &[FolderId::new("fC"), FolderId::new("fE")])
        .unwrap();

    let report_config = ReportConfig {
        all_folders: false,
        ..ReportConfig::default()
    };
    let options = PipelineOptions::from_config(&report_config, &ListingConfig::default(), &selection);
    let report = helpers::run(&options);

    let mut files: Vec<String> = report
        .non_empty_buckets()
        .flat_map(|b| b.files.iter().map(|f| f.id.to_string()))
        .collect();
    files.sort();
    files.dedup();
    assert_eq!(files, vec!["x1", "x4", "x9"]);
}

#[test]
fn test_remove_and_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.json");
    let index = ReportPipeline::new(helpers::listing())
        .index_folders(&helpers::options(false, FolderScope::All, false))
        .unwrap();

    let mut service = SelectionService::new(JsonFileSelectionStore::new(&path));
    service.pick(&index, &[FolderId::new("fA")]).unwrap();

    let err = service.remove(&FolderId::new("fB")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    service.remove(&FolderId::new("fA")).unwrap();
    assert_eq!(service.folder_scope().unwrap(), FolderScope::All);

    service.pick(&index, &[FolderId::new("fA")]).unwrap();
    service.reset().unwrap();
    assert!(!path.exists());
}

#[test]
fn test_shared_folder_needs_shared_index() {
    let owned_only = ReportPipeline::new(helpers::listing())
        .index_folders(&helpers::options(false, FolderScope::All, false))
        .unwrap();
    let mut service = SelectionService::new(drivelinks_service::MemorySelectionStore::new());

    let err = service.pick(&owned_only, &[FolderId::new("fT")]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let with_shared = ReportPipeline::new(helpers::listing())
        .index_folders(&helpers::options(true, FolderScope::All, false))
        .unwrap();
    let selection = service.pick(&with_shared, &[FolderId::new("fT")]).unwrap();
    assert_eq!(
        selection.iter().next().map(|(_, label)| label.as_str()),
        Some("Shared with me > Team > Docs >")
    );
}
