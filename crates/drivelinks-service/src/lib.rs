//! # drivelinks-service
//!
//! The DriveLinks engine. The folder phase of a run fills a [`FolderIndex`]
//! from a paginated listing; the file phase scopes its query through the
//! [`QueryBuilder`] and feeds every file into a [`ReportMaterializer`],
//! which attributes it to per-folder buckets stamped by the
//! [`PathResolver`].
//!
//! Everything here is synchronous and single-threaded. Collaborators (the
//! listing API and the selection store) come in through the traits in
//! `drivelinks-core`.

pub mod folder;
pub mod listing;
mod persist;
pub mod pipeline;
pub mod query;
pub mod refresh;
pub mod report;
pub mod selection;

pub use folder::{FolderIndex, PathResolver, ResolvedPath, expand};
pub use listing::{DrainStats, FixtureListing, drain};
pub use pipeline::{PipelineOptions, ReportPipeline};
pub use query::{FolderScope, Predicate, QueryBuilder, QueryScope, TargetType};
pub use refresh::{RefreshDecision, RefreshState, RefreshThrottle};
pub use report::{
    Band, PipelineStats, Report, ReportMaterializer, ReportOutcome, SheetLayout, SheetRow,
    SheetRows, build_rows,
};
pub use selection::{JsonFileSelectionStore, MemorySelectionStore, SelectionService};
