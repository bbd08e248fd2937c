//! Final ordering of algorithms by accumulated cost.

use serde::Serialize;

use crate::algorithms::Algorithm;
use crate::models::ResultsTable;

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub algorithm: Algorithm,
    pub total_ms: u64,
}

/// Algorithms ordered by total charged time, slowest first.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    entries: Vec<RankingEntry>,
}

impl Ranking {
    /// Rank a results table descending by total charged time. The sort is
    /// stable, so equal totals keep their table order.
    pub fn from_table(table: &ResultsTable) -> Self {
        let mut entries: Vec<RankingEntry> = table
            .entries()
            .iter()
            .map(|results| RankingEntry {
                algorithm: results.algorithm,
                total_ms: results.total_ms(),
            })
            .collect();
        entries.sort_by(|a, b| b.total_ms.cmp(&a.total_ms));
        Self { entries }
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunOutcome;

    fn table_with(outcomes: &[(Algorithm, Vec<u64>)]) -> ResultsTable {
        let suite: Vec<Algorithm> = outcomes.iter().map(|(a, _)| *a).collect();
        let mut table = ResultsTable::for_suite(&suite);
        for (algorithm, durations) in outcomes {
            for &elapsed_ms in durations {
                table.record(*algorithm, RunOutcome::Completed { elapsed_ms });
            }
        }
        table
    }

    #[test]
    fn test_ranking_is_descending_by_total() {
        // A totals 30, B totals 55, so B ranks first
        let table = table_with(&[
            (Algorithm::BubbleSort, vec![10, 20]),
            (Algorithm::QuickSort, vec![5, 50]),
        ]);

        let ranking = Ranking::from_table(&table);
        assert_eq!(
            ranking.entries(),
            &[
                RankingEntry {
                    algorithm: Algorithm::QuickSort,
                    total_ms: 55
                },
                RankingEntry {
                    algorithm: Algorithm::BubbleSort,
                    total_ms: 30
                },
            ]
        );
    }

    #[test]
    fn test_equal_totals_keep_table_order() {
        let table = table_with(&[
            (Algorithm::MergeSort, vec![15, 5]),
            (Algorithm::RadixSort, vec![20]),
            (Algorithm::QuickSort, vec![10, 10]),
        ]);

        let ranking = Ranking::from_table(&table);
        let order: Vec<Algorithm> = ranking.entries().iter().map(|e| e.algorithm).collect();
        assert_eq!(
            order,
            vec![
                Algorithm::MergeSort,
                Algorithm::RadixSort,
                Algorithm::QuickSort
            ]
        );
    }

    #[test]
    fn test_sentinels_dominate_real_durations() {
        let mut table = ResultsTable::for_suite(&[
            Algorithm::BubbleSort,
            Algorithm::StoogeSort,
            Algorithm::QuickSort,
        ]);
        // hours of real runtime
        table.record(
            Algorithm::BubbleSort,
            RunOutcome::Completed {
                elapsed_ms: 7_200_000,
            },
        );
        table.record(Algorithm::StoogeSort, RunOutcome::TimedOut);
        table.record(
            Algorithm::QuickSort,
            RunOutcome::Failed {
                message: "worker panicked".to_string(),
            },
        );

        let ranking = Ranking::from_table(&table);
        let order: Vec<Algorithm> = ranking.entries().iter().map(|e| e.algorithm).collect();
        assert_eq!(
            order,
            vec![
                Algorithm::QuickSort,
                Algorithm::StoogeSort,
                Algorithm::BubbleSort
            ]
        );
    }

    #[test]
    fn test_empty_table_ranks_everything_at_zero() {
        let table = ResultsTable::for_suite(&Algorithm::SEARCH_SUITE);
        let ranking = Ranking::from_table(&table);
        assert_eq!(ranking.entries().len(), 4);
        assert!(ranking.entries().iter().all(|e| e.total_ms == 0));
        // stable sort leaves the suite order intact
        let order: Vec<Algorithm> = ranking.entries().iter().map(|e| e.algorithm).collect();
        assert_eq!(order, Algorithm::SEARCH_SUITE.to_vec());
    }
}
