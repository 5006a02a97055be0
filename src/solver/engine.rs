//! The constraint engine: one game against one secret word

use super::Knowledge;
use super::scoring::{
    LetterPresence, VIABLE_PREFERENCE_TOLERANCE, best_scoring, letter_presence, letter_scores,
};
use crate::core::{Feedback, WORD_LEN, Word, index_letter};
use crate::error::SolverError;
use crate::wordlists::Dictionary;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Opening word chosen offline for strong average elimination
pub const DEFAULT_FIRST_GUESS: &str = "shoal";

/// Result of processing one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Continuing,
}

/// Constraint engine
///
/// Holds the knowledge state for one secret word and the candidate words
/// still consistent with it. The candidate set only ever shrinks.
///
/// The engine is not synchronized: one game session drives it sequentially.
/// The borrowed [`Dictionary`] can be shared by any number of engines.
pub struct Engine<'a, R: Rng = StdRng> {
    dictionary: &'a Dictionary,
    secret: &'a Word,
    knowledge: Knowledge,
    candidates: Vec<&'a Word>,
    presence: LetterPresence,
    history: Vec<(&'a Word, Feedback)>,
    attempts: usize,
    solved: bool,
    quiet: bool,
    rng: R,
}

impl<'a> Engine<'a, StdRng> {
    /// Create an engine with an OS-seeded random source
    ///
    /// `target` is normalized; if it is missing or invalid, a random dictionary
    /// word becomes the secret.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, target: Option<&str>) -> Self {
        Self::with_rng(dictionary, target, StdRng::from_os_rng())
    }

    /// Create an engine with a deterministic random source
    #[must_use]
    pub fn seeded(dictionary: &'a Dictionary, target: Option<&str>, seed: u64) -> Self {
        Self::with_rng(dictionary, target, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> Engine<'a, R> {
    /// Create an engine drawing all randomness from `rng`
    pub fn with_rng(dictionary: &'a Dictionary, target: Option<&str>, mut rng: R) -> Self {
        let secret = match target.map(|raw| dictionary.normalize(raw)) {
            Some(Ok(word)) => word,
            Some(Err(e)) => {
                warn!("{e}; choosing a random secret word");
                random_word(dictionary, &mut rng)
            }
            None => random_word(dictionary, &mut rng),
        };

        let candidates: Vec<&'a Word> = dictionary.words().iter().collect();
        let presence = letter_presence(&candidates);

        Self {
            dictionary,
            secret,
            knowledge: Knowledge::new(),
            candidates,
            presence,
            history: Vec::new(),
            attempts: 0,
            solved: false,
            quiet: false,
            rng,
        }
    }

    /// Suppress informational log lines (warnings still go through)
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn secret(&self) -> &'a Word {
        self.secret
    }

    /// Number of validated guesses processed so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Words still consistent with every guess, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Processed guesses with the feedback each received
    #[must_use]
    pub fn history(&self) -> &[(&'a Word, Feedback)] {
        &self.history
    }

    /// Feedback of the most recent guess
    #[must_use]
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.history.last().map(|&(_, feedback)| feedback)
    }

    /// Validate user input against the dictionary without touching any state
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if the input does not clean up to a dictionary word.
    pub fn normalize_and_validate(&self, raw: &str) -> Result<&'a Word, SolverError> {
        self.dictionary.normalize(raw)
    }

    /// Feedback `raw` would receive against the secret
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if `raw` is not a dictionary word.
    pub fn annotate(&self, raw: &str) -> Result<Feedback, SolverError> {
        let word = self.normalize_and_validate(raw)?;
        Ok(Feedback::calculate(word, self.secret))
    }

    /// Play a guess against the secret and narrow the candidate set
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if `raw` is not a dictionary word. In
    /// that case the guess is not counted and nothing changes.
    pub fn process_guess(&mut self, raw: &str) -> Result<Outcome, SolverError> {
        let guess = self.normalize_and_validate(raw)?;
        self.attempts += 1;

        let feedback = Feedback::calculate(guess, self.secret);
        self.history.push((guess, feedback));

        if guess == self.secret {
            return Ok(self.finish());
        }

        self.knowledge.record(guess, self.secret);
        self.filter_candidates();
        self.report(guess, feedback);

        Ok(Outcome::Continuing)
    }

    /// Apply feedback observed in an external game
    ///
    /// The secret is not consulted; the knowledge state is derived from the marks.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if `raw` is not a dictionary word.
    pub fn process_feedback(
        &mut self,
        raw: &str,
        feedback: Feedback,
    ) -> Result<Outcome, SolverError> {
        let guess = self.normalize_and_validate(raw)?;
        self.attempts += 1;
        self.history.push((guess, feedback));

        if feedback.is_solved() {
            return Ok(self.finish());
        }

        self.knowledge.record_feedback(guess, &feedback);
        self.filter_candidates();
        self.report(guess, feedback);

        Ok(Outcome::Continuing)
    }

    /// Rebuild the candidate set from the words the knowledge still admits
    ///
    /// Letter presence over the new candidates is recomputed for scoring.
    pub fn filter_candidates(&mut self) {
        let knowledge = &self.knowledge;
        self.candidates = self
            .candidates
            .iter()
            .copied()
            .filter(|word| knowledge.admits(word))
            .collect();
        self.presence = letter_presence(&self.candidates);
    }

    /// Uniformly random candidate
    ///
    /// # Errors
    /// Returns `SolverError::InconsistentState` if no candidates remain.
    pub fn suggest_random(&mut self) -> Result<&'a Word, SolverError> {
        self.candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(SolverError::InconsistentState)
    }

    /// Word covering the most informative letters
    ///
    /// Letters are scored by how many candidates contain them. With
    /// `restrict_to_candidates` the best candidate is returned. Otherwise the
    /// whole dictionary is searched (minus words already guessed), but the best
    /// candidate still wins when it scores within
    /// [`VIABLE_PREFERENCE_TOLERANCE`] of the overall best.
    ///
    /// # Errors
    /// Returns `SolverError::InconsistentState` if no candidates remain.
    pub fn suggest_eliminator(
        &self,
        restrict_to_candidates: bool,
    ) -> Result<&'a Word, SolverError> {
        let scores = letter_scores(&self.presence, &self.knowledge);

        let (best_candidate, candidate_score) =
            best_scoring(self.candidates.iter().copied(), &scores)
                .ok_or(SolverError::InconsistentState)?;

        if restrict_to_candidates {
            return Ok(best_candidate);
        }

        let fresh = self
            .dictionary
            .words()
            .iter()
            .filter(|&word| !self.already_guessed(word));

        match best_scoring(fresh, &scores) {
            Some((best, best_score))
                if candidate_score < VIABLE_PREFERENCE_TOLERANCE * best_score =>
            {
                Ok(best)
            }
            _ => Ok(best_candidate),
        }
    }

    /// The fixed opening word
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn suggest_default_first_guess(&self) -> &'static str {
        DEFAULT_FIRST_GUESS
    }

    fn already_guessed(&self, word: &Word) -> bool {
        self.history.iter().any(|&(guessed, _)| guessed == word)
    }

    fn finish(&mut self) -> Outcome {
        self.solved = true;
        if !self.quiet {
            info!(
                "Solved '{}' after {} attempt{}",
                self.secret,
                self.attempts,
                if self.attempts == 1 { "" } else { "s" }
            );
        }
        Outcome::Solved
    }

    fn report(&self, guess: &Word, feedback: Feedback) {
        if !self.quiet {
            info!(
                "Attempt {}: {} {} ({} candidates remain)",
                self.attempts,
                guess,
                feedback.to_emoji(),
                self.candidates.len()
            );
        }

        if log::log_enabled!(log::Level::Debug) {
            let bounds: Vec<String> = (0..self.knowledge.min_count().len())
                .filter(|&i| {
                    self.knowledge.min_count()[i] > 0
                        || self.knowledge.max_count()[i] < WORD_LEN as u8
                })
                .map(|i| {
                    format!(
                        "{}:{}..={}",
                        char::from(index_letter(i)),
                        self.knowledge.min_count()[i],
                        self.knowledge.max_count()[i]
                    )
                })
                .collect();
            debug!("Letter bounds: {}", bounds.join(" "));
        }
    }
}

fn random_word<'a, R: Rng>(dictionary: &'a Dictionary, rng: &mut R) -> &'a Word {
    &dictionary.words()[rng.random_range(0..dictionary.len())]
}
