//! Console lines and machine-readable exports for benchmark results.
//!
//! The formatting here is presentation only; everything it prints comes from
//! the structured models, which are also what the JSON export serializes.

use std::time::Duration;

use serde::Serialize;

use crate::benchmark::ranking::Ranking;
use crate::error::AppResult;
use crate::models::{ResultsTable, RunOutcome, RunRecord};

/// Line printed immediately after each run.
pub fn format_run_line(record: &RunRecord, time_limit: Duration) -> String {
    match &record.outcome {
        RunOutcome::Completed { elapsed_ms } => {
            format!(
                "{} | size {}: {} ms",
                record.algorithm, record.size, elapsed_ms
            )
        }
        RunOutcome::TimedOut => format!(
            "{} | size {}: TIMED OUT after {}s",
            record.algorithm,
            record.size,
            time_limit.as_secs()
        ),
        RunOutcome::Failed { message } => format!(
            "{} | size {}: FAILED ({})",
            record.algorithm, record.size, message
        ),
    }
}

/// Heading printed before a suite starts.
pub fn format_header(suite: &str) -> String {
    format!(
        "{suite} benchmark started at {}",
        chrono::Utc::now().to_rfc3339()
    )
}

/// The final ranking block, slowest algorithm first.
pub fn format_ranking(ranking: &Ranking) -> String {
    let mut out = String::from("\nTotal charged time per algorithm, slowest first:\n");
    for entry in ranking.entries() {
        out.push_str(&format!("  {}: {} ms\n", entry.algorithm, entry.total_ms));
    }
    out
}

#[derive(Debug, Serialize)]
struct ResultsReport<'a> {
    suite: &'a str,
    generated_at: String,
    results: &'a ResultsTable,
    ranking: &'a Ranking,
}

/// Serialize a finished pass to pretty JSON for downstream tooling.
pub fn results_json(suite: &str, table: &ResultsTable, ranking: &Ranking) -> AppResult<String> {
    let report = ResultsReport {
        suite,
        generated_at: chrono::Utc::now().to_rfc3339(),
        results: table,
        ranking,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Prints run lines and ranking blocks to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    time_limit: Duration,
}

impl ConsoleReporter {
    pub fn new(time_limit: Duration) -> Self {
        Self { time_limit }
    }

    pub fn header(&self, suite: &str) {
        println!("{}", format_header(suite));
    }

    pub fn run_line(&self, record: &RunRecord) {
        println!("{}", format_run_line(record, self.time_limit));
    }

    pub fn ranking(&self, ranking: &Ranking) {
        print!("{}", format_ranking(ranking));
    }
}
