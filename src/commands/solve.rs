//! Word solving command
//!
//! Solves a specific (or random) target word and returns the solution path.

use crate::solver::{Engine, GameRecord, Strategy, StrategyType, play_game};
use crate::wordlists::Dictionary;
use anyhow::Result;

/// Configuration for solving a word
pub struct SolveConfig {
    /// Target word; a random dictionary word when `None` or invalid
    pub target: Option<String>,
    pub strategy: StrategyType,
    /// Seed for the engine's random source; OS entropy when `None`
    pub seed: Option<u64>,
    pub quiet: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: Option<String>) -> Self {
        Self {
            target,
            strategy: StrategyType::default(),
            seed: None,
            quiet: false,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub strategy: &'static str,
    pub record: GameRecord,
}

/// Solve a word with the configured strategy
///
/// # Errors
///
/// Returns an error if the strategy runs out of candidates or attempts.
pub fn solve_word(dictionary: &Dictionary, config: &SolveConfig) -> Result<SolveResult> {
    let target = config.target.as_deref();
    let engine = match config.seed {
        Some(seed) => Engine::seeded(dictionary, target, seed),
        None => Engine::new(dictionary, target),
    };
    let mut engine = engine.quiet(config.quiet);

    let record = play_game(&mut engine, &config.strategy)?;

    Ok(SolveResult {
        strategy: config.strategy.name(),
        record,
    })
}
