//! Integration tests for report materialization over a sample drive.

mod helpers;

use drivelinks_entity::folder::FolderKey;
use drivelinks_service::{
    Band, FixtureListing, FolderScope, ReportOutcome, ReportPipeline, SheetLayout, build_rows,
};

#[test]
fn test_owned_report_buckets_sorted_by_path() {
    let report = helpers::run(&helpers::options(false, FolderScope::All, false));

    let paths: Vec<&str> = report.non_empty_buckets().map(|b| b.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "My Drive > ",
            "My Drive > Projects",
            "My Drive > Projects > 2024",
            "My Drive > Projects > 2024 > Invoices",
            "My Drive > Projects > 2024 > Reports",
            "My Drive > Projects > Specs",
            "My Drive > Reports",
        ]
    );

    let stats = report.stats;
    assert_eq!(stats.folders_indexed, 6);
    assert_eq!(stats.files_seen, 8);
    assert_eq!(stats.files_ingested, 7);
    assert_eq!(stats.rows, 8);
    assert_eq!(stats.invalid_records, 1);
}

#[test]
fn test_multi_parent_file_attributed_to_each_folder() {
    let report = helpers::run(&helpers::options(false, FolderScope::All, false));

    let year = helpers::bucket(&report, "fB");
    let invoices = helpers::bucket(&report, "fC");
    assert_eq!(helpers::file_ids(year), vec!["x1"]);
    assert_eq!(helpers::file_ids(invoices), vec!["x1", "x4"]);

    let a = &year.files[0];
    let b = &invoices.files[0];
    assert_eq!(a.direct_link, b.direct_link);
    assert_eq!(a.access_summary, b.access_summary);
    assert_eq!(a.folder_id.as_str(), "fB");
    assert_eq!(b.folder_id.as_str(), "fC");
}

#[test]
fn test_same_named_folders_stay_separate() {
    let report = helpers::run(&helpers::options(false, FolderScope::All, false));

    let nested = helpers::bucket(&report, "fD");
    let top = helpers::bucket(&report, "fE");
    assert_eq!(nested.key.name, "Reports");
    assert_eq!(top.key.name, "Reports");
    assert_ne!(nested.key, top.key);
    assert_eq!(helpers::file_ids(nested), vec!["x8"]);
    assert_eq!(helpers::file_ids(top), vec!["x9"]);
}

#[test]
fn test_links_and_access() {
    let report = helpers::run(&helpers::options(false, FolderScope::All, false));

    let budget = &helpers::bucket(&report, "fB").files[0];
    assert_eq!(
        budget.direct_link,
        "https://docs.google.com/spreadsheets/d/x1/export?format=pdf"
    );
    assert_eq!(budget.access_summary, "ana@example.com");

    let kickoff = &report
        .buckets
        .iter()
        .find(|b| b.key == FolderKey::root())
        .unwrap()
        .files[0];
    assert_eq!(
        kickoff.direct_link,
        "https://docs.google.com/presentation/d/x3/export/pdf"
    );
    assert_eq!(kickoff.access_summary, "Anybody with the link");
    assert_eq!(kickoff.folder_id.as_str(), "0AAroot");

    let notes = &helpers::bucket(&report, "fA").files[0];
    assert_eq!(
        notes.direct_link,
        "https://drive.google.com/uc?id=x2&export=download"
    );
    assert_eq!(notes.access_summary, "Not Shared with anyone");

    let contract = &helpers::bucket(&report, "fC").files[1];
    assert_eq!(contract.access_summary, "ana@example.com");

    let csv = &helpers::bucket(&report, "fD").files[0];
    assert_eq!(csv.direct_link, "Not applicable");
}

#[test]
fn test_shared_items_included_on_request() {
    let report = helpers::run(&helpers::options(true, FolderScope::All, false));

    let docs = helpers::bucket(&report, "fT");
    assert_eq!(docs.path, "Shared with me > Team > Docs >");
    assert!(docs.partial_path);
    assert_eq!(docs.files[0].access_summary, "me@example.com");
    assert_eq!(
        docs.files[0].direct_link,
        "https://docs.google.com/document/d/x5/export?format=pdf"
    );

    let loose = report
        .buckets
        .iter()
        .find(|b| b.key == FolderKey::shared_with_me())
        .unwrap();
    assert_eq!(helpers::file_ids(loose), vec!["x10"]);

    let last_paths: Vec<&str> = report
        .non_empty_buckets()
        .map(|b| b.path.as_str())
        .skip_while(|p| p.starts_with("My Drive"))
        .collect();
    assert_eq!(
        last_paths,
        vec!["Shared with me > ", "Shared with me > Team > Docs >"]
    );
}

#[test]
fn test_paths_resolve_when_children_listed_before_parents() {
    let listing = helpers::listing();
    let position = |id: &str| {
        listing
            .items()
            .iter()
            .position(|item| item.id.as_deref() == Some(id))
            .unwrap()
    };
    // With three items per page each child sits on an earlier page than its parent.
    assert!(position("fC") / 3 < position("fB") / 3);
    assert!(position("fT") / 3 < position("fS") / 3);

    let report = helpers::run(&helpers::options(true, FolderScope::All, false));
    assert_eq!(
        helpers::bucket(&report, "fC").path,
        "My Drive > Projects > 2024 > Invoices"
    );
    assert_eq!(
        helpers::bucket(&report, "fT").path,
        "Shared with me > Team > Docs >"
    );
}

#[test]
fn test_rerun_is_stable() {
    let options = helpers::options(true, FolderScope::All, false);
    let first = helpers::run(&options);
    let second = helpers::run(&options);

    let flatten = |report: &drivelinks_service::Report| -> Vec<(String, String)> {
        report
            .buckets
            .iter()
            .flat_map(|b| {
                b.files
                    .iter()
                    .map(move |f| (b.path.clone(), f.id.to_string()))
            })
            .collect()
    };
    assert_eq!(flatten(&first), flatten(&second));
    assert_ne!(first.run_id, second.run_id);
}

#[test]
fn test_no_files_is_empty_outcome() {
    let listing = FixtureListing::from_json_str(
        r#"[{"id": "f", "title": "Empty", "ownedByMe": true, "mimeType": "application/vnd.google-apps.folder"}]"#,
    )
    .unwrap();

    let outcome = ReportPipeline::new(listing)
        .run(&helpers::options(false, FolderScope::All, false))
        .unwrap();
    match outcome {
        ReportOutcome::Empty(stats) => {
            assert_eq!(stats.files_seen, 0);
            assert_eq!(stats.folders_indexed, 1);
        }
        ReportOutcome::Ready(_) => panic!("expected an empty outcome"),
    }
}

#[test]
fn test_sheet_rows() {
    let report = helpers::run(&helpers::options(false, FolderScope::All, false));
    let sheet = build_rows(&report.buckets, SheetLayout::default());

    assert_eq!(sheet.header.len(), 5);
    assert_eq!(sheet.rows.len(), report.stats.rows);

    let first = &sheet.rows[0];
    assert_eq!(first.band, Band::Shaded);
    assert_eq!(
        first.cells[0],
        r#"=hyperlink("https://drive.google.com/drive/u/0/folders/0AAroot";"My Drive")"#
    );
    assert_eq!(first.cells[1], "My Drive > ");
    assert_eq!(
        first.cells[2],
        r#"=hyperlink("https://drive.google.com/file/d/x3/edit";"Kickoff")"#
    );
    assert_eq!(sheet.rows[1].band, Band::Light);

    // Second row of the Invoices bucket leaves the folder cells blank.
    let invoices: Vec<_> = sheet
        .rows
        .iter()
        .filter(|r| r.cells[2].contains("/x4/"))
        .collect();
    assert_eq!(invoices[0].cells[0], "");
    assert_eq!(invoices[0].cells[1], "");
}

#[test]
fn test_report_json_written() {
    let report = helpers::run(&helpers::options(false, FolderScope::All, false));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("report.json");

    report.save(&path, false).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["stats"]["rows"], 8);
    assert_eq!(json["buckets"][0]["path"], "My Drive > ");
    assert_eq!(json["buckets"][0]["files"][0]["id"], "x3");
}
