//! AlgoBench - Classic Algorithm Benchmarking Harness
//!
//! This library provides the core functionality for AlgoBench, a harness
//! that times classic search and sort algorithms over generated integer
//! datasets and ranks them by total elapsed time.
//!
//! # Features
//!
//! - Ten classic routines: linear/binary/ternary/jump search and
//!   bubble/quick/stooge/radix/merge/bitonic sort
//! - Per-run isolation on blocking workers with a hard time limit
//! - Timeout and failure sentinels so every run stays comparable
//! - Reusable sample files with one integer per line
//!
//! # Architecture
//!
//! The library follows a layered layout:
//! - **Algorithms**: the routines themselves plus normalized dispatch
//! - **Dataset**: sample set generation, persistence and loading
//! - **Benchmark**: timed execution, the driver loop, ranking and reports
//! - **Models**: run outcomes and the results table

pub mod algorithms;
pub mod benchmark;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use algorithms::Algorithm;
pub use benchmark::{BenchmarkRunner, Ranking, TimedExecutor, run_suite};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ResultsTable, RunOutcome, RunRecord};
