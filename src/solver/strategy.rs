//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::Engine;
use crate::core::Word;
use crate::error::SolverError;
use rand::Rng;

/// A strategy for picking the next guess from the engine's current state
pub trait Strategy {
    /// Short name used on the command line and in reports
    fn name(&self) -> &'static str;

    /// Select the next guess
    ///
    /// # Errors
    /// Returns `SolverError::InconsistentState` if no candidates remain.
    fn next_guess<'a, R: Rng>(&self, engine: &mut Engine<'a, R>) -> Result<&'a Word, SolverError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Random candidate every turn
    Random(RandomStrategy),
    /// Best-scoring candidate every turn
    Eliminator(EliminatorStrategy),
    /// Fixed opener, then dictionary-wide elimination (default)
    Flagship(FlagshipStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Random(s) => s.name(),
            Self::Eliminator(s) => s.name(),
            Self::Flagship(s) => s.name(),
        }
    }

    fn next_guess<'a, R: Rng>(&self, engine: &mut Engine<'a, R>) -> Result<&'a Word, SolverError> {
        match self {
            Self::Random(s) => s.next_guess(engine),
            Self::Eliminator(s) => s.next_guess(engine),
            Self::Flagship(s) => s.next_guess(engine),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "eliminator", "flagship".
    /// Defaults to flagship if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            "eliminator" => Self::Eliminator(EliminatorStrategy),
            _ => Self::Flagship(FlagshipStrategy::default()),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Flagship(FlagshipStrategy::default())
    }
}

/// Random strategy
///
/// Guesses a uniformly random candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn next_guess<'a, R: Rng>(&self, engine: &mut Engine<'a, R>) -> Result<&'a Word, SolverError> {
        engine.suggest_random()
    }
}

/// Eliminator strategy
///
/// Always guesses the best-scoring word that could still be the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EliminatorStrategy;

impl Strategy for EliminatorStrategy {
    fn name(&self) -> &'static str {
        "eliminator"
    }

    fn next_guess<'a, R: Rng>(&self, engine: &mut Engine<'a, R>) -> Result<&'a Word, SolverError> {
        engine.suggest_eliminator(true)
    }
}

/// Flagship strategy
///
/// Opens with the default first guess, then searches the whole dictionary for
/// the best eliminator until only a few candidates remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagshipStrategy {
    /// Restrict guesses to candidates once candidates <= this threshold
    pub viable_threshold: usize,
}

impl FlagshipStrategy {
    /// Create a new flagship strategy
    ///
    /// # Parameters
    /// - `viable_threshold`: Guess only candidates when candidates <= this value (default: 3)
    #[must_use]
    pub const fn new(viable_threshold: usize) -> Self {
        Self { viable_threshold }
    }
}

impl Default for FlagshipStrategy {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Strategy for FlagshipStrategy {
    fn name(&self) -> &'static str {
        "flagship"
    }

    fn next_guess<'a, R: Rng>(&self, engine: &mut Engine<'a, R>) -> Result<&'a Word, SolverError> {
        if engine.attempts() == 0 {
            // Custom dictionaries may not contain the opener
            let opener = engine.suggest_default_first_guess();
            if let Ok(word) = engine.normalize_and_validate(opener) {
                return Ok(word);
            }
        }

        let restrict = engine.candidates().len() <= self.viable_threshold;
        engine.suggest_eliminator(restrict)
    }
}
