//! Terminal output formatting
//!
//! Display utilities for CLI results, plus the logger the binary installs.

pub mod display;
pub mod formatters;
pub mod logger;

pub use display::{print_batch_result, print_solve_result};
