//! Algorithm catalog and normalized dispatch
//!
//! Every routine the harness can time is a variant of [`Algorithm`]. Drivers
//! iterate fixed suites; the executor hands each run a working buffer and,
//! for searches, the key to look for, through [`Algorithm::run`].

pub mod search;
pub mod sort;

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a routine does to its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Search,
    Sort,
}

/// Every algorithm the harness knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    TernarySearch,
    JumpSearch,
    BubbleSort,
    QuickSort,
    StoogeSort,
    RadixSort,
    MergeSort,
    BitonicSort,
}

impl Algorithm {
    /// The search suite, in benchmark order.
    pub const SEARCH_SUITE: [Algorithm; 4] = [
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::TernarySearch,
        Algorithm::JumpSearch,
    ];

    /// The sort suite, in benchmark order.
    pub const SORT_SUITE: [Algorithm; 6] = [
        Algorithm::BubbleSort,
        Algorithm::QuickSort,
        Algorithm::StoogeSort,
        Algorithm::RadixSort,
        Algorithm::MergeSort,
        Algorithm::BitonicSort,
    ];

    /// Stable display name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "LinearSearch",
            Algorithm::BinarySearch => "BinarySearch",
            Algorithm::TernarySearch => "TernarySearch",
            Algorithm::JumpSearch => "JumpSearch",
            Algorithm::BubbleSort => "BubbleSort",
            Algorithm::QuickSort => "QuickSort",
            Algorithm::StoogeSort => "StoogeSort",
            Algorithm::RadixSort => "RadixSort",
            Algorithm::MergeSort => "MergeSort",
            Algorithm::BitonicSort => "BitonicSort",
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::LinearSearch
            | Algorithm::BinarySearch
            | Algorithm::TernarySearch
            | Algorithm::JumpSearch => AlgorithmKind::Search,
            Algorithm::BubbleSort
            | Algorithm::QuickSort
            | Algorithm::StoogeSort
            | Algorithm::RadixSort
            | Algorithm::MergeSort
            | Algorithm::BitonicSort => AlgorithmKind::Sort,
        }
    }

    /// Whether the routine only works on an ascending-sorted buffer.
    pub fn requires_sorted_input(&self) -> bool {
        matches!(
            self,
            Algorithm::BinarySearch | Algorithm::TernarySearch | Algorithm::JumpSearch
        )
    }

    /// Run the routine over `data`. Searches need `key`; sorts ignore it.
    ///
    /// Search results are discarded here: the harness times runs, it does not
    /// verify them.
    pub fn run(&self, data: &mut [i64], key: Option<i64>) -> Result<(), AlgorithmError> {
        let missing = || AlgorithmError::MissingKey(*self);
        match self {
            Algorithm::LinearSearch => {
                let _ = search::linear(data, key.ok_or_else(missing)?);
            }
            Algorithm::BinarySearch => {
                let _ = search::binary(data, key.ok_or_else(missing)?);
            }
            Algorithm::TernarySearch => {
                let _ = search::ternary(data, key.ok_or_else(missing)?);
            }
            Algorithm::JumpSearch => {
                let _ = search::jump(data, key.ok_or_else(missing)?);
            }
            Algorithm::BubbleSort => sort::bubble(data),
            Algorithm::QuickSort => sort::quick(data),
            Algorithm::StoogeSort => sort::stooge(data),
            Algorithm::RadixSort => sort::radix(data),
            Algorithm::MergeSort => sort::merge(data),
            Algorithm::BitonicSort => sort::bitonic(data),
        }
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors surfaced by [`Algorithm::run`] before the routine proper starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("{0} requires a search key")]
    MissingKey(Algorithm),
}
