//! Custom error types and handling
//!
//! This module defines the application's error type. Algorithm-level problems
//! never surface here: a run that fails or times out becomes a scored outcome,
//! not an error. `AppError` covers the harness itself failing to operate.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
