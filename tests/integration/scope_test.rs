//! Integration tests for folder scoping and query construction.

mod helpers;

use std::collections::BTreeSet;

use drivelinks_core::error::ErrorKind;
use drivelinks_core::types::FolderId;
use drivelinks_service::{FolderScope, QueryBuilder, QueryScope, ReportPipeline, expand};

fn ids(list: &[&str]) -> BTreeSet<FolderId> {
    list.iter().map(|id| FolderId::new(*id)).collect()
}

fn all_file_ids(report: &drivelinks_service::Report) -> BTreeSet<String> {
    report
        .buckets
        .iter()
        .flat_map(|b| b.files.iter().map(|f| f.id.to_string()))
        .collect()
}

#[test]
fn test_recursive_closure_over_sample_drive() {
    let index = ReportPipeline::new(helpers::listing())
        .index_folders(&helpers::options(false, FolderScope::All, false))
        .unwrap();

    assert_eq!(expand(&index, &ids(&["fB"])), ids(&["fB", "fC", "fD", "fM"]));
    assert_eq!(expand(&index, &ids(&["fC"])), ids(&["fC", "fM"]));
    assert_eq!(expand(&index, &ids(&["fE"])), ids(&["fE"]));
}

#[test]
fn test_recursive_query_orders_by_path() {
    let index = ReportPipeline::new(helpers::listing())
        .index_folders(&helpers::options(false, FolderScope::All, false))
        .unwrap();

    let query = QueryBuilder::new(&index)
        .build(&QueryScope::files(false, helpers::custom(&["fB"]), true))
        .unwrap();
    assert_eq!(
        query,
        r#"trashed = false and "me" in owners and ("fB" in parents or "fC" in parents or "fD" in parents or "fM" in parents) and mimeType!="application/vnd.google-apps.folder""#
    );
}

#[test]
fn test_custom_scope_without_recursion() {
    let report = helpers::run(&helpers::options(false, helpers::custom(&["fB"]), false));

    // Only x1 lives directly in fB; it still shows up under its other parent.
    assert_eq!(all_file_ids(&report), ["x1".to_string()].into_iter().collect());
    assert_eq!(helpers::file_ids(helpers::bucket(&report, "fC")), vec!["x1"]);
}

#[test]
fn test_custom_scope_with_recursion() {
    let report = helpers::run(&helpers::options(false, helpers::custom(&["fB"]), true));

    let expected: BTreeSet<String> = ["x1", "x4", "x8", "x11"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(all_file_ids(&report), expected);
}

#[test]
fn test_empty_custom_scope_rejected() {
    let err = ReportPipeline::new(helpers::listing())
        .run(&helpers::options(false, FolderScope::Custom(BTreeSet::new()), false))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn test_folder_query_sent_first() {
    let mut pipeline = ReportPipeline::new(helpers::listing());
    pipeline
        .run(&helpers::options(true, FolderScope::All, false))
        .unwrap();

    let listing = pipeline.into_inner();
    let queries: Vec<&str> = listing.requests().iter().map(|r| r.query.as_str()).collect();
    assert_eq!(
        queries.first().copied(),
        Some(r#"trashed = false and mimeType="application/vnd.google-apps.folder""#)
    );
    assert_eq!(
        queries.last().copied(),
        Some(r#"trashed = false and mimeType!="application/vnd.google-apps.folder""#)
    );
}
