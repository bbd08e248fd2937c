//! Run outcome taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::constants::{FAILURE_SENTINEL_MS, TIMEOUT_SENTINEL_MS, outcomes};

/// What happened to a single timed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The routine finished inside the time limit.
    Completed { elapsed_ms: u64 },
    /// The time limit elapsed first; the worker was abandoned.
    TimedOut,
    /// The worker panicked or the run could not start.
    Failed { message: String },
}

impl RunOutcome {
    /// Milliseconds charged to the ranking for this outcome.
    ///
    /// Sentinels keep the ordering total: any timeout outweighs any real
    /// duration, and any failure outweighs any timeout.
    pub fn score_ms(&self) -> u64 {
        match self {
            RunOutcome::Completed { elapsed_ms } => *elapsed_ms,
            RunOutcome::TimedOut => TIMEOUT_SENTINEL_MS,
            RunOutcome::Failed { .. } => FAILURE_SENTINEL_MS,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }

    /// Short label used in logs and exports.
    pub fn label(&self) -> &'static str {
        match self {
            RunOutcome::Completed { .. } => outcomes::COMPLETED,
            RunOutcome::TimedOut => outcomes::TIMED_OUT,
            RunOutcome::Failed { .. } => outcomes::FAILED,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One algorithm timed once against one sample size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub algorithm: Algorithm,
    pub size: usize,
    pub outcome: RunOutcome,
}
