//! Benchmark driver loop.
//!
//! [`BenchmarkRunner`] walks the configured sizes in order and, within each
//! size, every suite algorithm in suite order. Each run gets its own copy of
//! the sample set and its own worker; a run failing or timing out never stops
//! the pass, and a size whose sample set cannot be prepared is skipped whole.

use rand::Rng;
use tracing::{error, info, warn};

use crate::algorithms::{Algorithm, AlgorithmKind};
use crate::benchmark::executor::TimedExecutor;
use crate::benchmark::ranking::Ranking;
use crate::benchmark::report::{self, ConsoleReporter};
use crate::config::{BenchmarkConfig, Config};
use crate::dataset::{DatasetSource, FileDataset};
use crate::error::AppResult;
use crate::models::{ResultsTable, RunRecord};

/// Times every suite algorithm against every configured sample size.
pub struct BenchmarkRunner {
    algorithms: Vec<Algorithm>,
    sizes: Vec<usize>,
    executor: TimedExecutor,
    reporter: ConsoleReporter,
}

impl BenchmarkRunner {
    pub fn new(algorithms: Vec<Algorithm>, config: &BenchmarkConfig) -> Self {
        let time_limit = config.run_timeout();
        Self {
            algorithms,
            sizes: config.sample_sizes.clone(),
            executor: TimedExecutor::new(time_limit),
            reporter: ConsoleReporter::new(time_limit),
        }
    }

    /// Run the whole suite and return the accumulated table.
    pub async fn run(&self, dataset: &dyn DatasetSource) -> AppResult<ResultsTable> {
        let mut table = ResultsTable::for_suite(&self.algorithms);

        for &size in &self.sizes {
            let mut sample = match self.prepare_sample(dataset, size).await {
                Ok(sample) => sample,
                Err(err) => {
                    error!(size, error = %err, "sample set unavailable, skipping size");
                    continue;
                }
            };

            if self.algorithms.iter().any(|a| a.requires_sorted_input()) {
                sample.sort_unstable();
            }
            let key = self.select_key(&sample, size);

            for &algorithm in &self.algorithms {
                let outcome = self.executor.execute(algorithm, sample.clone(), key).await;
                let record = RunRecord {
                    algorithm,
                    size,
                    outcome,
                };
                info!(
                    algorithm = %record.algorithm,
                    size,
                    outcome = %record.outcome,
                    score_ms = record.outcome.score_ms(),
                    "run finished"
                );
                self.reporter.run_line(&record);
                table.record(record.algorithm, record.outcome);
            }
        }

        Ok(table)
    }

    /// Load the sample set, generating it first when it cannot be read.
    async fn prepare_sample(
        &self,
        dataset: &dyn DatasetSource,
        size: usize,
    ) -> AppResult<Vec<i64>> {
        match dataset.load(size).await {
            Ok(sample) => Ok(sample),
            Err(err) => {
                info!(size, reason = %err, "generating sample set");
                dataset.generate(size).await?;
                dataset.load(size).await
            }
        }
    }

    /// For suites containing searches, pick this size's key: a value drawn
    /// from the sample itself, so every search can succeed.
    fn select_key(&self, sample: &[i64], size: usize) -> Option<i64> {
        let wants_key = self
            .algorithms
            .iter()
            .any(|a| a.kind() == AlgorithmKind::Search);
        if !wants_key {
            return None;
        }
        if sample.is_empty() {
            warn!(size, "empty sample set, search runs will fail");
            return None;
        }

        let index = rand::rng().random_range(0..sample.len());
        let key = sample[index];
        info!(size, key, index, "search key selected");
        Some(key)
    }
}

/// Shared driver entry: build the dataset and runner from `config`, run the
/// suite, print the results and export them when configured to.
pub async fn run_suite(config: &Config, algorithms: Vec<Algorithm>, suite: &str) -> AppResult<()> {
    let dataset = FileDataset::new(&config.dataset);
    let reporter = ConsoleReporter::new(config.benchmark.run_timeout());
    let runner = BenchmarkRunner::new(algorithms, &config.benchmark);

    reporter.header(suite);
    let table = runner.run(&dataset).await?;
    if table.is_empty() {
        warn!(suite, "no runs recorded");
    }

    let ranking = Ranking::from_table(&table);
    reporter.ranking(&ranking);

    if let Some(path) = &config.benchmark.results_json {
        let json = report::results_json(suite, &table, &ranking)?;
        tokio::fs::write(path, json).await?;
        info!(path = %path.display(), "results exported");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::dataset::MemoryDataset;
    use crate::error::AppError;
    use crate::models::RunOutcome;

    fn test_config(sizes: Vec<usize>) -> BenchmarkConfig {
        BenchmarkConfig {
            sample_sizes: sizes,
            run_timeout_seconds: 30,
            results_json: None,
        }
    }

    #[tokio::test]
    async fn test_sort_suite_records_one_outcome_per_size() {
        let dataset = MemoryDataset::default();
        let config = test_config(vec![64, 128]);
        let runner =
            BenchmarkRunner::new(vec![Algorithm::QuickSort, Algorithm::MergeSort], &config);

        let table = runner.run(&dataset).await.unwrap();

        assert_eq!(table.entries().len(), 2);
        for entry in table.entries() {
            assert_eq!(entry.outcomes.len(), 2, "{:?}", entry.algorithm);
            assert!(entry.outcomes.iter().all(RunOutcome::is_completed));
        }
    }

    #[tokio::test]
    async fn test_search_suite_completes_against_preloaded_sample() {
        let dataset = MemoryDataset::default();
        // unsorted on purpose; the runner sorts before searching
        dataset.insert(8, vec![8, 6, 1, 3, 9, 2, 7, 5]).await;
        let config = test_config(vec![8]);
        let runner = BenchmarkRunner::new(Algorithm::SEARCH_SUITE.to_vec(), &config);

        let table = runner.run(&dataset).await.unwrap();

        assert_eq!(table.entries().len(), 4);
        for entry in table.entries() {
            assert_eq!(entry.outcomes.len(), 1);
            assert!(
                entry.outcomes[0].is_completed(),
                "{:?} got {:?}",
                entry.algorithm,
                entry.outcomes[0]
            );
        }
    }

    #[tokio::test]
    async fn test_entries_keep_suite_order_across_sizes() {
        let dataset = MemoryDataset::default();
        let config = test_config(vec![16, 32]);
        let suite = vec![
            Algorithm::MergeSort,
            Algorithm::BubbleSort,
            Algorithm::QuickSort,
        ];
        let runner = BenchmarkRunner::new(suite.clone(), &config);

        let table = runner.run(&dataset).await.unwrap();

        let recorded: Vec<Algorithm> = table.entries().iter().map(|e| e.algorithm).collect();
        assert_eq!(recorded, suite);
    }

    struct BrokenDataset;

    #[async_trait]
    impl DatasetSource for BrokenDataset {
        async fn generate(&self, _size: usize) -> AppResult<()> {
            Err(AppError::Dataset("generation refused".to_string()))
        }

        async fn load(&self, _size: usize) -> AppResult<Vec<i64>> {
            Err(AppError::Dataset("load refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_unpreparable_size_is_skipped_not_fatal() {
        let config = test_config(vec![32]);
        let runner = BenchmarkRunner::new(vec![Algorithm::BubbleSort], &config);

        let table = runner.run(&BrokenDataset).await.unwrap();

        // the suite entry exists but holds no outcomes
        assert_eq!(table.entries().len(), 1);
        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn test_runner_generates_missing_samples_once() {
        let dataset = MemoryDataset::default();
        let config = test_config(vec![16]);
        let runner = BenchmarkRunner::new(vec![Algorithm::RadixSort], &config);

        let table = runner.run(&dataset).await.unwrap();

        assert!(!table.is_empty());
        // the generated sample is now loadable outside the runner too
        assert_eq!(dataset.load(16).await.unwrap().len(), 16);
    }
}
