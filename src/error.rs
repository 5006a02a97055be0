//! Error type shared by the dictionary, the engine and the strategies

use crate::core::WordError;
use thiserror::Error;

/// Errors surfaced by the solver
///
/// The engine never swallows these: callers decide whether to re-prompt
/// (`InvalidWord`) or treat the condition as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Input could not be normalized to a dictionary word. Nothing was counted or mutated.
    #[error("invalid word '{input}': {reason}")]
    InvalidWord { input: String, reason: WordError },

    /// The candidate set is empty, so the accumulated feedback is contradictory
    #[error("no candidate words remain; the feedback received is contradictory")]
    InconsistentState,

    /// The dictionary source is empty or malformed
    #[error("invalid dictionary: {0}")]
    Configuration(String),

    /// A strategy used up its attempt budget without solving
    #[error("gave up after {attempts} attempts without solving")]
    Unsolved { attempts: usize },
}

impl SolverError {
    pub(crate) fn invalid_word(input: &str, reason: WordError) -> Self {
        Self::InvalidWord {
            input: input.to_string(),
            reason,
        }
    }
}
