//! Application-wide constants
//!
//! This module contains all constant values used throughout the harness.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// DATASET DEFAULTS
// =============================================================================

/// Default directory for generated sample files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default sample sizes benchmarked by the drivers, ascending
pub const DEFAULT_SAMPLE_SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];

/// Lower bound (inclusive) of generated sample values
pub const SAMPLE_VALUE_MIN: i64 = 10_000_000;

/// Upper bound (exclusive) of generated sample values
pub const SAMPLE_VALUE_MAX: i64 = 100_000_000;

// =============================================================================
// EXECUTION DEFAULTS
// =============================================================================

/// Default per-run time limit in seconds
pub const DEFAULT_RUN_TIMEOUT_SECONDS: u64 = 120;

/// Score charged to a run that exceeded its time limit, in milliseconds.
/// Larger than any plausible real duration.
pub const TIMEOUT_SENTINEL_MS: u64 = 10_000_000_000;

/// Score charged to a run that failed outright, in milliseconds.
/// Strictly larger than [`TIMEOUT_SENTINEL_MS`] so failures rank worse
/// than timeouts.
pub const FAILURE_SENTINEL_MS: u64 = 100_000_000_000;

/// Grace period granted to runtime shutdown when workers were abandoned
pub const SHUTDOWN_GRACE_SECONDS: u64 = 1;

// =============================================================================
// REPORTED OUTCOME LABELS
// =============================================================================

/// Run outcome labels as they appear in logs and exports
pub mod outcomes {
    pub const COMPLETED: &str = "completed";
    pub const TIMED_OUT: &str = "timed_out";
    pub const FAILED: &str = "failed";
}
