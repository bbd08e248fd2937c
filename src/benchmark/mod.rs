//! Benchmark execution engine
//!
//! The engine has four pieces:
//!
//! 1. **Executor** (`executor.rs`): runs one algorithm on a blocking worker
//!    under a time limit and maps what happened to a `RunOutcome`.
//! 2. **Runner** (`runner.rs`): drives sizes and suites, prepares sample
//!    sets and accumulates the results table.
//! 3. **Ranking** (`ranking.rs`): orders algorithms by total charged time.
//! 4. **Report** (`report.rs`): console lines and the optional JSON export.

pub mod executor;
pub mod ranking;
pub mod report;
pub mod runner;

pub use executor::TimedExecutor;
pub use ranking::{Ranking, RankingEntry};
pub use report::ConsoleReporter;
pub use runner::{BenchmarkRunner, run_suite};
