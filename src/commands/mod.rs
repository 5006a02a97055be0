//! Command implementations

pub mod assist;
pub mod batch;
pub mod interactive;
pub mod solve;

pub use assist::run_assist;
pub use batch::{BatchConfig, BatchResult, run_batch};
pub use interactive::run_interactive;
pub use solve::{SolveConfig, SolveResult, solve_word};
