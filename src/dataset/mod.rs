//! Sample set generation, persistence and loading
//!
//! Sample files hold one integer per line and are named `numbers_<size>.txt`
//! under the configured data directory. Values are drawn uniformly from the
//! configured range. [`MemoryDataset`] offers the same interface without
//! touching disk, which is what the tests run against.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rand::Rng;
use tokio::fs;
use tokio::sync::Mutex;

use crate::config::DatasetConfig;
use crate::constants::{SAMPLE_VALUE_MAX, SAMPLE_VALUE_MIN};
use crate::error::{AppError, AppResult};

/// Where sample sets come from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Create (or overwrite) the sample set for `size`.
    async fn generate(&self, size: usize) -> AppResult<()>;

    /// Load the sample set for `size`.
    async fn load(&self, size: usize) -> AppResult<Vec<i64>>;
}

/// Uniform random values in `[value_min, value_max)`.
fn random_sample(size: usize, value_min: i64, value_max: i64) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| rng.random_range(value_min..value_max))
        .collect()
}

/// Sample sets persisted as one-integer-per-line text files.
pub struct FileDataset {
    data_dir: PathBuf,
    value_min: i64,
    value_max: i64,
}

impl FileDataset {
    pub fn new(config: &DatasetConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            value_min: config.value_min,
            value_max: config.value_max,
        }
    }

    /// Path of the sample file for `size`.
    pub fn sample_path(&self, size: usize) -> PathBuf {
        self.data_dir.join(format!("numbers_{size}.txt"))
    }
}

#[async_trait]
impl DatasetSource for FileDataset {
    async fn generate(&self, size: usize) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| io_error(&self.data_dir, e))?;

        let values = random_sample(size, self.value_min, self.value_max);
        let mut contents = String::with_capacity(values.len() * 10);
        for value in &values {
            contents.push_str(&value.to_string());
            contents.push('\n');
        }

        let path = self.sample_path(size);
        fs::write(&path, contents)
            .await
            .map_err(|e| io_error(&path, e))?;
        tracing::info!(size, path = %path.display(), "sample set generated");
        Ok(())
    }

    async fn load(&self, size: usize) -> AppResult<Vec<i64>> {
        let path = self.sample_path(size);
        let text = fs::read_to_string(&path)
            .await
            .map_err(|e| io_error(&path, e))?;

        text.lines()
            .map(|line| {
                line.trim().parse::<i64>().map_err(|_| {
                    AppError::Dataset(format!(
                        "{}: invalid integer line {line:?}",
                        path.display()
                    ))
                })
            })
            .collect()
    }
}

fn io_error(path: &Path, err: std::io::Error) -> AppError {
    AppError::Dataset(format!("{}: {err}", path.display()))
}

/// In-memory sample sets keyed by size.
pub struct MemoryDataset {
    value_min: i64,
    value_max: i64,
    samples: Mutex<HashMap<usize, Vec<i64>>>,
}

impl MemoryDataset {
    pub fn new(value_min: i64, value_max: i64) -> Self {
        Self {
            value_min,
            value_max,
            samples: Mutex::new(HashMap::new()),
        }
    }

    /// Preload a fixed sample, handy for deterministic tests.
    pub async fn insert(&self, size: usize, values: Vec<i64>) {
        self.samples.lock().await.insert(size, values);
    }
}

impl Default for MemoryDataset {
    fn default() -> Self {
        Self::new(SAMPLE_VALUE_MIN, SAMPLE_VALUE_MAX)
    }
}

#[async_trait]
impl DatasetSource for MemoryDataset {
    async fn generate(&self, size: usize) -> AppResult<()> {
        let values = random_sample(size, self.value_min, self.value_max);
        self.samples.lock().await.insert(size, values);
        Ok(())
    }

    async fn load(&self, size: usize) -> AppResult<Vec<i64>> {
        self.samples
            .lock()
            .await
            .get(&size)
            .cloned()
            .ok_or_else(|| AppError::Dataset(format!("no in-memory sample of size {size}")))
    }
}
