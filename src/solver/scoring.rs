//! Letter-presence scoring behind the eliminator suggestion
//!
//! A greedy frequency heuristic: letters that appear in many remaining
//! candidates split the candidate set best, so words covering many such
//! letters are preferred.

use super::Knowledge;
use crate::core::{ALPHABET_LEN, Word};

/// Per-letter damping applied once for every confirmed occurrence
///
/// A letter known to occur `n` times has its score multiplied by `PRESENCE_DAMPING^n`.
pub const PRESENCE_DAMPING: f64 = 0.1;

/// A candidate scoring at least this fraction of the overall best is preferred
pub const VIABLE_PREFERENCE_TOLERANCE: f64 = 0.99999;

/// Number of words containing each letter at least once
pub type LetterPresence = [u32; ALPHABET_LEN];

/// Score contributed by each letter
pub type LetterScores = [f64; ALPHABET_LEN];

/// Count, per letter, the words that contain it (duplicates counted once per word)
#[must_use]
pub fn letter_presence(words: &[&Word]) -> LetterPresence {
    let mut presence = [0u32; ALPHABET_LEN];
    for word in words {
        for letter in word.distinct_letters() {
            presence[letter] += 1;
        }
    }
    presence
}

/// Turn presence counts into letter scores under the current knowledge
///
/// Determined letters (`min == max`) score zero. Others are damped
/// exponentially by their known minimum count.
#[must_use]
pub fn letter_scores(presence: &LetterPresence, knowledge: &Knowledge) -> LetterScores {
    let mut scores = [0.0; ALPHABET_LEN];
    for (i, score) in scores.iter_mut().enumerate() {
        if !knowledge.is_determined(i) {
            let damping = PRESENCE_DAMPING.powi(i32::from(knowledge.min_count()[i]));
            *score = f64::from(presence[i]) * damping;
        }
    }
    scores
}

/// Sum of the scores of a word's distinct letters
#[must_use]
pub fn word_score(word: &Word, scores: &LetterScores) -> f64 {
    word.distinct_letters().map(|letter| scores[letter]).sum()
}

/// Highest-scoring word of `pool` with its score
///
/// Ties go to the first word in pool order. Returns `None` for an empty pool.
pub fn best_scoring<'a, I>(pool: I, scores: &LetterScores) -> Option<(&'a Word, f64)>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut best: Option<(&'a Word, f64)> = None;
    for word in pool {
        let score = word_score(word, scores);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((word, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::letter_index;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn presence_counts_each_word_once_per_letter() {
        let owned = words(&["books", "boost", "shoal"]);
        let refs: Vec<&Word> = owned.iter().collect();
        let presence = letter_presence(&refs);

        assert_eq!(presence[letter_index(b'o')], 3);
        assert_eq!(presence[letter_index(b's')], 3);
        assert_eq!(presence[letter_index(b'b')], 2);
        assert_eq!(presence[letter_index(b'z')], 0);
    }

    #[test]
    fn determined_letters_score_zero() {
        let owned = words(&["books", "shoal"]);
        let refs: Vec<&Word> = owned.iter().collect();

        let mut knowledge = Knowledge::new();
        knowledge.record(&owned[0], &owned[1]);

        let scores = letter_scores(&letter_presence(&refs), &knowledge);
        // b and k are absent, o is pinned to exactly one
        assert!(scores[letter_index(b'b')].abs() < f64::EPSILON);
        assert!(scores[letter_index(b'k')].abs() < f64::EPSILON);
        assert!(scores[letter_index(b'o')].abs() < f64::EPSILON);
        // h is unknown: full presence score
        assert!((scores[letter_index(b'h')] - 1.0).abs() < 1e-12);
        // s is known at least once: damped
        assert!((scores[letter_index(b's')] - 2.0 * PRESENCE_DAMPING).abs() < 1e-12);
    }

    #[test]
    fn word_score_counts_duplicates_once() {
        let mut scores = [0.0; ALPHABET_LEN];
        scores[letter_index(b'o')] = 10.0;
        scores[letter_index(b'b')] = 1.0;

        let word = Word::new("booby").unwrap();
        assert!((word_score(&word, &scores) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn best_scoring_breaks_ties_by_first_occurrence() {
        let owned = words(&["abide", "bathe", "abode"]);
        let mut scores = [0.0; ALPHABET_LEN];
        for letter in *b"abde" {
            scores[letter_index(letter)] = 1.0;
        }

        // All three share a, b, d/t/h, e: abide and abode both score 4
        let (best, score) = best_scoring(&owned, &scores).unwrap();
        assert_eq!(best.text(), "abide");
        assert!((score - 4.0).abs() < 1e-12);
    }

    #[test]
    fn best_scoring_empty_pool() {
        let scores = [1.0; ALPHABET_LEN];
        assert!(best_scoring(std::iter::empty(), &scores).is_none());
    }
}
