//! Throttling of trigger-initiated refreshes.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drivelinks_core::config::RefreshConfig;
use drivelinks_core::error::AppError;

use crate::persist;

/// Whether a refresh may run now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    /// Run the pipeline.
    Proceed,
    /// Too soon after the previous run.
    Skip {
        /// Earliest moment a trigger may run again.
        next_allowed: DateTime<Utc>,
    },
}

/// Minimum spacing between trigger-initiated runs. Manual runs are never
/// throttled.
#[derive(Debug, Clone, Copy)]
pub struct RefreshThrottle {
    min_interval: Duration,
}

impl RefreshThrottle {
    /// Create a throttle with the given spacing.
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    /// Throttle from the refresh section of the config.
    pub fn from_config(config: &RefreshConfig) -> Self {
        let seconds = i64::try_from(config.min_interval_seconds).unwrap_or(i64::MAX);
        Self::new(Duration::try_seconds(seconds).unwrap_or(Duration::MAX))
    }

    /// Decide whether a run starting at `now` may proceed.
    pub fn decide(
        &self,
        from_trigger: bool,
        last_run: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> RefreshDecision {
        let Some(last_run) = last_run.filter(|_| from_trigger) else {
            return RefreshDecision::Proceed;
        };

        match last_run.checked_add_signed(self.min_interval) {
            Some(next_allowed) if now < next_allowed => RefreshDecision::Skip { next_allowed },
            _ => RefreshDecision::Proceed,
        }
    }
}

/// Record of the last completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshState {
    /// When the run finished.
    pub last_run_at: DateTime<Utc>,
    /// Identifier of the report the run produced; `None` when the listing
    /// held no files.
    pub run_id: Option<Uuid>,
}

impl RefreshState {
    /// Load the state file; a missing file means no run happened yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, AppError> {
        persist::read_json(path.as_ref())
    }

    /// Overwrite the state file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        persist::write_json(path.as_ref(), self, true)
    }
}
