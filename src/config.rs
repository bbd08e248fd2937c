//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before a driver runs. Drivers
//! receive the loaded [`Config`] by value; nothing reads the environment after startup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_RUN_TIMEOUT_SECONDS, DEFAULT_SAMPLE_SIZES, SAMPLE_VALUE_MAX,
    SAMPLE_VALUE_MIN,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub dataset: DatasetConfig,
    pub benchmark: BenchmarkConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
    pub json: bool,
}

/// Sample set generation and storage configuration
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Directory holding the generated sample files
    pub data_dir: PathBuf,
    /// Lower bound (inclusive) of generated values
    pub value_min: i64,
    /// Upper bound (exclusive) of generated values
    pub value_max: i64,
}

/// Benchmark execution configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Sample sizes to benchmark, in iteration order
    pub sample_sizes: Vec<usize>,
    /// Per-run time limit in seconds
    pub run_timeout_seconds: u64,
    /// Optional path for a machine-readable results dump
    pub results_json: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            logging: LoggingConfig::from_env()?,
            dataset: DatasetConfig::from_env()?,
            benchmark: BenchmarkConfig::from_env()?,
        })
    }
}

impl LoggingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json: env::var("BENCH_LOG_JSON")
                .map(|v| matches!(v.as_str(), "1" | "true"))
                .unwrap_or(false),
        })
    }
}

impl DatasetConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            data_dir: PathBuf::from(
                env::var("BENCH_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            ),
            value_min: SAMPLE_VALUE_MIN,
            value_max: SAMPLE_VALUE_MAX,
        })
    }
}

impl BenchmarkConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let sample_sizes = match env::var("BENCH_SAMPLE_SIZES") {
            Ok(raw) => parse_sample_sizes(&raw)?,
            Err(_) => DEFAULT_SAMPLE_SIZES.to_vec(),
        };

        let run_timeout_seconds = env::var("BENCH_RUN_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| DEFAULT_RUN_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BENCH_RUN_TIMEOUT_SECONDS".to_string()))?;
        if run_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue(
                "BENCH_RUN_TIMEOUT_SECONDS".to_string(),
            ));
        }

        Ok(Self {
            sample_sizes,
            run_timeout_seconds,
            results_json: env::var("BENCH_RESULTS_JSON").ok().map(PathBuf::from),
        })
    }

    /// Per-run time limit as a [`Duration`]
    pub fn run_timeout(&self) -> Duration {
        Duration::from_secs(self.run_timeout_seconds)
    }
}

/// Parse a comma-separated list of sample sizes, e.g. `"10000,100000,1000000"`
fn parse_sample_sizes(raw: &str) -> Result<Vec<usize>, ConfigError> {
    let sizes: Vec<usize> = raw
        .split(',')
        .map(|part| part.trim().parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|_| ConfigError::InvalidValue("BENCH_SAMPLE_SIZES".to_string()))?;

    if sizes.is_empty() || sizes.contains(&0) {
        return Err(ConfigError::InvalidValue("BENCH_SAMPLE_SIZES".to_string()));
    }
    Ok(sizes)
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
