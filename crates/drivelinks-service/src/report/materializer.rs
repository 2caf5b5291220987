//! Per-folder bucketing of listed files.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::trace;

use drivelinks_core::error::AppError;
use drivelinks_core::types::{FolderId, ItemId};
use drivelinks_entity::file::FileEntry;
use drivelinks_entity::folder::{FolderBucket, FolderKey};
use drivelinks_entity::item::Item;

use super::access::access_summary;
use super::link::direct_link;
use crate::folder::path::{MY_DRIVE_LABEL, SHARED_WITH_ME_LABEL};
use crate::folder::{FolderIndex, PathResolver, ResolvedPath};

/// One pending attribution of a file.
struct Target {
    key: FolderKey,
    folder_id: FolderId,
    path: Option<ResolvedPath>,
}

/// Attributes every listed file to one bucket per parent folder.
///
/// The root bucket exists from construction. A `(bucket, file)` pair is
/// attributed at most once, however often the file is listed.
#[derive(Debug)]
pub struct ReportMaterializer<'a> {
    index: &'a FolderIndex,
    resolver: PathResolver<'a>,
    buckets: HashMap<FolderKey, FolderBucket>,
    attributed: HashSet<(FolderKey, ItemId)>,
    files_ingested: usize,
    rows: usize,
}

impl<'a> ReportMaterializer<'a> {
    /// Create a materializer over a fully built index.
    pub fn new(index: &'a FolderIndex) -> Self {
        let root = FolderKey::root();
        let mut buckets = HashMap::new();
        buckets.insert(
            root.clone(),
            FolderBucket::new(root, MY_DRIVE_LABEL, false),
        );

        Self {
            index,
            resolver: PathResolver::new(index),
            buckets,
            attributed: HashSet::new(),
            files_ingested: 0,
            rows: 0,
        }
    }

    /// Attribute one file item, returning the number of rows added.
    ///
    /// Every bucket path is resolved before anything is recorded, so an item
    /// failing with `InvalidRecord` or `CycleDetected` leaves the report
    /// untouched.
    pub fn ingest_file(&mut self, item: &Item) -> Result<usize, AppError> {
        let id = item.identity()?;
        let targets = self.targets(item)?;

        let entry = Arc::new(FileEntry {
            id: id.clone(),
            name: item.title().to_string(),
            owned_by_me: item.owned_by_me,
            direct_link: direct_link(item, &id),
            access_summary: access_summary(item),
        });

        let mut added = 0;
        for target in targets {
            if !self.attributed.insert((target.key.clone(), id.clone())) {
                trace!(file_id = %id, folder_id = %target.folder_id, "Duplicate attribution skipped");
                continue;
            }

            let bucket = self.buckets.entry(target.key.clone()).or_insert_with(|| {
                let path = target.path.unwrap_or_else(|| ResolvedPath {
                    text: MY_DRIVE_LABEL.to_string(),
                    partial: false,
                });
                FolderBucket::new(target.key, path.text, path.partial)
            });
            bucket.push(Arc::clone(&entry), target.folder_id);
            added += 1;
        }

        if added > 0 {
            self.files_ingested += 1;
            self.rows += added;
        }
        Ok(added)
    }

    fn targets(&self, item: &Item) -> Result<Vec<Target>, AppError> {
        if item.parents.is_empty() {
            let (key, label) = if item.owned_by_me {
                (FolderKey::root(), MY_DRIVE_LABEL)
            } else {
                (FolderKey::shared_with_me(), SHARED_WITH_ME_LABEL)
            };
            return Ok(vec![Target {
                folder_id: key.id.clone(),
                key,
                path: Some(ResolvedPath {
                    text: label.to_string(),
                    partial: false,
                }),
            }]);
        }

        item.parents
            .iter()
            .map(|parent| {
                if parent.is_root {
                    return Ok(Target {
                        key: FolderKey::root(),
                        folder_id: parent.id.clone(),
                        path: None,
                    });
                }

                let name = self
                    .index
                    .get(&parent.id)
                    .map(|record| record.title.clone())
                    .unwrap_or_default();
                let key = FolderKey::new(name, parent.id.clone());
                let path = if self.buckets.contains_key(&key) {
                    None
                } else {
                    Some(self.resolver.resolve(&parent.id, false)?)
                };

                Ok(Target {
                    key,
                    folder_id: parent.id.clone(),
                    path,
                })
            })
            .collect()
    }

    /// Files attributed to at least one bucket so far.
    pub fn files_ingested(&self) -> usize {
        self.files_ingested
    }

    /// Rows across all buckets so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// All buckets ordered by path, ties broken by key. Rows keep their
    /// ingestion order.
    pub fn emit_report(self) -> Vec<FolderBucket> {
        let mut buckets: Vec<FolderBucket> = self.buckets.into_values().collect();
        buckets.sort_by(|a, b| a.report_order(b));
        buckets
    }
}
