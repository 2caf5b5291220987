//! Report materialization: per-file link and access derivation, folder
//! bucketing, and the flattened sheet rows.

pub mod access;
pub mod link;
pub mod materializer;
pub mod model;
pub mod rows;

pub use access::access_summary;
pub use link::direct_link;
pub use materializer::ReportMaterializer;
pub use model::{PipelineStats, Report, ReportOutcome};
pub use rows::{Band, HYPERLINK_SEPARATOR, SheetLayout, SheetRow, SheetRows, build_rows};
