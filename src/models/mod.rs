//! Domain models
//!
//! This module contains the outcome and result types shared by the executor,
//! the runner and the reporters.

pub mod outcome;
pub mod results;

pub use outcome::*;
pub use results::*;
