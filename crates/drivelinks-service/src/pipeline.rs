//! Two-phase report run: index every folder, then materialize the files.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use drivelinks_core::config::listing::ListingConfig;
use drivelinks_core::config::report::ReportConfig;
use drivelinks_core::error::{AppError, ErrorKind};
use drivelinks_core::traits::ListingSource;
use drivelinks_core::types::FolderSelection;
use drivelinks_entity::item::Item;

use crate::folder::FolderIndex;
use crate::listing::drain;
use crate::query::fields::{FILE_FIELDS, FOLDER_FIELDS};
use crate::query::{FolderScope, QueryBuilder, QueryScope};
use crate::report::{PipelineStats, Report, ReportMaterializer, ReportOutcome};

/// Scope of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Include items shared with the principal.
    pub include_shared: bool,
    /// Folder restriction of the file phase.
    pub folder_scope: FolderScope,
    /// Apply a custom scope to every descendant folder.
    pub recursive: bool,
    /// Listing page size.
    pub page_size: u32,
}

impl PipelineOptions {
    /// Options from config and the stored selection. `all_folders` wins over
    /// the selection.
    pub fn from_config(
        report: &ReportConfig,
        listing: &ListingConfig,
        selection: &FolderSelection,
    ) -> Self {
        let folder_scope = if report.all_folders {
            FolderScope::All
        } else {
            FolderScope::from_selection(selection)
        };

        Self {
            include_shared: report.include_shared,
            folder_scope,
            recursive: report.recursive,
            page_size: listing.page_size,
        }
    }

    /// Query scope of the file phase.
    pub fn file_scope(&self) -> QueryScope {
        QueryScope::files(self.include_shared, self.folder_scope.clone(), self.recursive)
    }
}

/// Runs the folder phase and the file phase against one listing source.
#[derive(Debug)]
pub struct ReportPipeline<S> {
    source: S,
}

impl<S> ReportPipeline<S>
where
    S: ListingSource<Item = Item>,
{
    /// Create a pipeline over a listing source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Give back the listing source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Drain the folder listing into a fresh index.
    pub fn index_folders(&mut self, options: &PipelineOptions) -> Result<FolderIndex, AppError> {
        let mut stats = PipelineStats::default();
        self.folder_phase(options, &mut stats)
    }

    /// Run both phases.
    ///
    /// Items without an id or stuck in a folder cycle are logged, counted
    /// and skipped. Listing failures abort the run.
    pub fn run(&mut self, options: &PipelineOptions) -> Result<ReportOutcome, AppError> {
        let run_id = Uuid::new_v4();
        let mut stats = PipelineStats::default();
        info!(%run_id, include_shared = options.include_shared, recursive = options.recursive, "Report run started");

        let index = self.folder_phase(options, &mut stats)?;
        info!(%run_id, folders = stats.folders_indexed, "Folder phase complete");

        let query = QueryBuilder::new(&index).build(&options.file_scope())?;
        let mut materializer = ReportMaterializer::new(&index);

        drain(
            &mut self.source,
            &query,
            FILE_FIELDS,
            options.page_size,
            |item| {
                stats.files_seen += 1;
                match materializer.ingest_file(&item) {
                    Ok(_) => Ok(()),
                    Err(err) => record_skip(&mut stats, item.id.as_deref(), err),
                }
            },
        )?;

        stats.files_ingested = materializer.files_ingested();
        stats.rows = materializer.rows();

        if stats.files_seen == 0 {
            info!(%run_id, "File listing returned no files");
            return Ok(ReportOutcome::Empty(stats));
        }

        let buckets = materializer.emit_report();
        info!(
            %run_id,
            buckets = buckets.len(),
            rows = stats.rows,
            skipped = stats.skipped(),
            "File phase complete"
        );

        Ok(ReportOutcome::Ready(Report {
            run_id,
            generated_at: Utc::now(),
            buckets,
            stats,
        }))
    }

    fn folder_phase(
        &mut self,
        options: &PipelineOptions,
        stats: &mut PipelineStats,
    ) -> Result<FolderIndex, AppError> {
        let empty = FolderIndex::new();
        let query = QueryBuilder::new(&empty).build(&QueryScope::folders(options.include_shared))?;

        let mut index = FolderIndex::new();

        drain(
            &mut self.source,
            &query,
            FOLDER_FIELDS,
            options.page_size,
            |item| {
                stats.folders_seen += 1;
                match index.ingest(&item) {
                    Ok(_) => Ok(()),
                    Err(err) => record_skip(&mut *stats, item.id.as_deref(), err),
                }
            },
        )?;

        stats.folders_indexed = index.len();
        Ok(index)
    }
}

/// Count and log an item-scoped failure; anything else ends the drain.
fn record_skip(
    stats: &mut PipelineStats,
    item_id: Option<&str>,
    err: AppError,
) -> Result<(), AppError> {
    if !err.is_item_scoped() {
        return Err(err);
    }
    if err.kind == ErrorKind::InvalidRecord {
        stats.invalid_records += 1;
    } else {
        stats.cycles += 1;
    }
    warn!(item_id = item_id.unwrap_or("<none>"), error = %err, "Skipping listing item");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::FixtureListing;
    use drivelinks_core::types::FolderId;

    const DRIVE: &str = r#"[
        {"id": "fa", "title": "Alpha", "ownedByMe": true, "mimeType": "application/vnd.google-apps.folder", "parents": [{"id": "0AAroot", "isRoot": true}]},
        {"id": "fb", "title": "Beta", "ownedByMe": true, "mimeType": "application/vnd.google-apps.folder", "parents": [{"id": "fa"}]},
        {"title": "Nameless", "ownedByMe": true, "mimeType": "application/vnd.google-apps.folder", "parents": [{"id": "fa"}]},
        {"id": "x", "title": "x.pdf", "ownedByMe": true, "mimeType": "application/pdf", "permissionIds": ["p0"], "parents": [{"id": "fb"}]},
        {"id": "y", "title": "y.pdf", "ownedByMe": true, "mimeType": "application/pdf", "permissionIds": ["p0"], "parents": [{"id": "fa"}]},
        {"title": "broken.pdf", "ownedByMe": true, "mimeType": "application/pdf", "parents": [{"id": "fa"}]}
    ]"#;

    fn options(scope: FolderScope, recursive: bool) -> PipelineOptions {
        PipelineOptions {
            include_shared: false,
            folder_scope: scope,
            recursive,
            page_size: 2,
        }
    }

    #[test]
    fn test_run_all_folders() {
        let listing = FixtureListing::from_json_str(DRIVE).unwrap();
        let mut pipeline = ReportPipeline::new(listing);
        let outcome = pipeline.run(&options(FolderScope::All, false)).unwrap();

        let stats = *outcome.stats();
        assert_eq!(stats.folders_seen, 3);
        assert_eq!(stats.folders_indexed, 2);
        assert_eq!(stats.files_seen, 3);
        assert_eq!(stats.files_ingested, 2);
        assert_eq!(stats.invalid_records, 2);

        let report = outcome.report().unwrap();
        let paths: Vec<_> = report.non_empty_buckets().map(|b| b.path.as_str()).collect();
        assert_eq!(paths, vec!["My Drive > Alpha", "My Drive > Alpha > Beta"]);
    }

    #[test]
    fn test_folder_phase_runs_first() {
        let listing = FixtureListing::from_json_str(DRIVE).unwrap();
        let mut pipeline = ReportPipeline::new(listing);
        pipeline.run(&options(FolderScope::All, false)).unwrap();

        let listing = pipeline.into_inner();
        let first = &listing.requests()[0];
        assert!(first.query.ends_with(r#"mimeType="application/vnd.google-apps.folder""#));
        assert_eq!(first.fields, FOLDER_FIELDS);
        let last = listing.requests().last().unwrap();
        assert_eq!(last.fields, FILE_FIELDS);
    }

    #[test]
    fn test_custom_scope_non_recursive() {
        let listing = FixtureListing::from_json_str(DRIVE).unwrap();
        let scope = FolderScope::Custom([FolderId::new("fa")].into_iter().collect());
        let outcome = ReportPipeline::new(listing)
            .run(&options(scope, false))
            .unwrap();

        let report = outcome.report().unwrap();
        let ids: Vec<_> = report
            .non_empty_buckets()
            .flat_map(|b| b.files.iter().map(|f| f.id.as_str().to_string()))
            .collect();
        assert_eq!(ids, vec!["y"]);
    }

    #[test]
    fn test_empty_result() {
        let listing = FixtureListing::from_json_str(
            r#"[{"id": "fa", "title": "Alpha", "ownedByMe": true, "mimeType": "application/vnd.google-apps.folder"}]"#,
        )
        .unwrap();
        let outcome = ReportPipeline::new(listing)
            .run(&options(FolderScope::All, false))
            .unwrap();
        assert!(matches!(outcome, ReportOutcome::Empty(_)));
        assert_eq!(outcome.stats().folders_indexed, 1);
    }

    #[test]
    fn test_record_skip_only_absorbs_item_errors() {
        let mut stats = PipelineStats::default();
        record_skip(&mut stats, Some("x"), AppError::invalid_record("no id")).unwrap();
        record_skip(&mut stats, None, AppError::cycle_detected("loop")).unwrap();
        assert_eq!((stats.invalid_records, stats.cycles), (1, 1));

        let err = record_skip(&mut stats, Some("y"), AppError::storage("disk full")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
        assert_eq!(stats.skipped(), 2);
    }

    #[test]
    fn test_options_from_config() {
        let mut selection = FolderSelection::new();
        selection.insert(FolderId::new("fa"), "My Drive > Alpha");

        let mut report = ReportConfig::default();
        let listing = ListingConfig::default();
        assert_eq!(
            PipelineOptions::from_config(&report, &listing, &selection).folder_scope,
            FolderScope::All
        );

        report.all_folders = false;
        let options = PipelineOptions::from_config(&report, &listing, &selection);
        assert_eq!(
            options.folder_scope,
            FolderScope::Custom([FolderId::new("fa")].into_iter().collect())
        );
        assert_eq!(options.page_size, 100);
    }
}
