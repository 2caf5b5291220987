//! Report output types.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drivelinks_core::error::AppError;
use drivelinks_entity::folder::FolderBucket;

use crate::persist;

/// Counters collected over one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Folder items returned by the folder listing.
    pub folders_seen: usize,
    /// Distinct folders in the index.
    pub folders_indexed: usize,
    /// File items returned by the file listing.
    pub files_seen: usize,
    /// Files attributed to at least one bucket.
    pub files_ingested: usize,
    /// Rows across all buckets.
    pub rows: usize,
    /// Items skipped for a missing id.
    pub invalid_records: usize,
    /// Items skipped because their folder chain loops.
    pub cycles: usize,
}

impl PipelineStats {
    /// Items dropped from the report.
    pub fn skipped(&self) -> usize {
        self.invalid_records + self.cycles
    }
}

/// A materialized report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run identifier.
    pub run_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Buckets ordered by folder path.
    pub buckets: Vec<FolderBucket>,
    /// Run counters.
    pub stats: PipelineStats,
}

impl Report {
    /// Buckets holding at least one row.
    pub fn non_empty_buckets(&self) -> impl Iterator<Item = &FolderBucket> {
        self.buckets.iter().filter(|b| !b.is_empty())
    }

    /// Write the report as JSON, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>, pretty: bool) -> Result<(), AppError> {
        persist::write_json(path.as_ref(), self, pretty)
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// The file listing produced a report.
    Ready(Report),
    /// The file listing returned no files.
    Empty(PipelineStats),
}

impl ReportOutcome {
    /// Run counters, whatever the outcome.
    pub fn stats(&self) -> &PipelineStats {
        match self {
            Self::Ready(report) => &report.stats,
            Self::Empty(stats) => stats,
        }
    }

    /// The report, if one was produced.
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Ready(report) => Some(report),
            Self::Empty(_) => None,
        }
    }
}
