//! Playing a strategy against the engine until the secret is found

use super::strategy::Strategy;
use super::{Engine, Outcome};
use crate::core::Feedback;
use crate::error::SolverError;
use rand::Rng;

/// A single guess of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Every guess of a game, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: String,
    pub steps: Vec<Step>,
}

impl GameRecord {
    /// Number of guesses, the last one being the solution
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }
}

/// Run `strategy` until the engine reports `Solved`
///
/// Every strategy here guesses a word at most once, so a game never needs more
/// attempts than the dictionary has words. Hitting that cap is reported as
/// `SolverError::Unsolved`.
///
/// # Errors
///
/// Returns `SolverError::InconsistentState` if the candidate set empties, or
/// `SolverError::Unsolved` if the attempt cap is reached.
pub fn play_game<R: Rng, S: Strategy>(
    engine: &mut Engine<'_, R>,
    strategy: &S,
) -> Result<GameRecord, SolverError> {
    let limit = engine.dictionary().len();
    let mut steps = Vec::new();

    while engine.attempts() < limit {
        let candidates_before = engine.candidates().len();
        let guess = strategy.next_guess(engine)?;
        let outcome = engine.process_guess(guess.text())?;

        steps.push(Step {
            word: guess.text().to_string(),
            feedback: engine
                .last_feedback()
                .unwrap_or_else(|| Feedback::calculate(guess, engine.secret())),
            candidates_before,
            candidates_after: engine.candidates().len(),
        });

        if outcome == Outcome::Solved {
            return Ok(GameRecord {
                secret: engine.secret().text().to_string(),
                steps,
            });
        }
    }

    Err(SolverError::Unsolved {
        attempts: engine.attempts(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{
        EliminatorStrategy, FlagshipStrategy, RandomStrategy, StrategyType,
    };
    use crate::wordlists::Dictionary;

    #[test]
    fn every_strategy_solves() {
        let dictionary = Dictionary::embedded().unwrap();

        for strategy in [
            StrategyType::Random(RandomStrategy),
            StrategyType::Eliminator(EliminatorStrategy),
            StrategyType::Flagship(FlagshipStrategy::default()),
        ] {
            for target in ["women", "abyss", "death"] {
                let mut engine = Engine::seeded(&dictionary, Some(target), 11).quiet(true);
                let record = play_game(&mut engine, &strategy).unwrap();

                assert_eq!(record.secret, target);
                assert_eq!(record.steps.last().unwrap().word, target);
                assert!(record.steps.last().unwrap().feedback.is_solved());
                assert_eq!(record.attempts(), engine.attempts());
            }
        }
    }

    #[test]
    fn flagship_solves_every_dictionary_word() {
        let dictionary = Dictionary::embedded().unwrap();
        let strategy = FlagshipStrategy::default();

        for word in dictionary.words() {
            let mut engine = Engine::seeded(&dictionary, Some(word.text()), 0).quiet(true);
            let record = play_game(&mut engine, &strategy).unwrap();

            assert_eq!(record.secret, word.text());
            assert_eq!(record.steps.last().unwrap().word, word.text());
            assert!(engine.is_solved());
        }
    }

    #[test]
    fn candidate_counts_never_grow() {
        let dictionary = Dictionary::embedded().unwrap();
        let mut engine = Engine::seeded(&dictionary, Some("shoal"), 5).quiet(true);
        let record = play_game(&mut engine, &StrategyType::default()).unwrap();

        // The opener is the secret itself
        assert_eq!(record.attempts(), 1);

        let mut engine = Engine::seeded(&dictionary, Some("crane"), 5).quiet(true);
        let record = play_game(&mut engine, &StrategyType::default()).unwrap();
        for pair in record.steps.windows(2) {
            assert!(pair[0].candidates_after <= pair[0].candidates_before);
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
    }

    #[test]
    fn empty_candidates_surface_as_inconsistent_state() {
        let dictionary = Dictionary::from_slice(&["shoal", "books", "crane"]).unwrap();
        let mut engine = Engine::seeded(&dictionary, Some("books"), 1).quiet(true);

        // Fabricated feedback that no word satisfies
        engine
            .process_feedback("crane", "YYYYY".parse().unwrap())
            .unwrap();

        assert_eq!(
            play_game(&mut engine, &EliminatorStrategy),
            Err(SolverError::InconsistentState)
        );
    }
}
