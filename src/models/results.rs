//! Accumulated results for one benchmark pass.

use serde::Serialize;

use crate::algorithms::Algorithm;
use crate::models::outcome::RunOutcome;

/// All outcomes recorded for one algorithm, in recording order.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmResults {
    pub algorithm: Algorithm,
    pub outcomes: Vec<RunOutcome>,
}

impl AlgorithmResults {
    /// Total milliseconds charged across recorded runs, sentinels included.
    pub fn total_ms(&self) -> u64 {
        self.outcomes.iter().map(RunOutcome::score_ms).sum()
    }
}

/// Per-algorithm outcome table preserving suite order.
///
/// Entries keep the order the suite declared its algorithms in, no matter how
/// runs interleave across sizes. That order is what breaks ties in the final
/// ranking.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsTable {
    entries: Vec<AlgorithmResults>,
}

impl ResultsTable {
    /// Empty table with one entry per suite algorithm.
    pub fn for_suite(algorithms: &[Algorithm]) -> Self {
        Self {
            entries: algorithms
                .iter()
                .map(|&algorithm| AlgorithmResults {
                    algorithm,
                    outcomes: Vec::new(),
                })
                .collect(),
        }
    }

    /// Append an outcome under its algorithm. An algorithm the table has not
    /// seen before is registered at the back.
    pub fn record(&mut self, algorithm: Algorithm, outcome: RunOutcome) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.algorithm == algorithm)
        {
            Some(entry) => entry.outcomes.push(outcome),
            None => self.entries.push(AlgorithmResults {
                algorithm,
                outcomes: vec![outcome],
            }),
        }
    }

    pub fn entries(&self) -> &[AlgorithmResults] {
        &self.entries
    }

    /// True when no run has been recorded at all.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.outcomes.is_empty())
    }
}
