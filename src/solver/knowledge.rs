//! Accumulated knowledge about the secret word
//!
//! Tracks confirmed positions, per-position exclusions and per-letter
//! occurrence bounds. Every update only narrows what is known.

use crate::core::{
    ALPHABET_LEN, Feedback, LetterCounts, Mark, WORD_LEN, Word, index_letter, letter_index,
};
use std::array;

/// What one guess reveals about how often a letter occurs in the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountClue {
    /// The guess held more copies than the secret, so the count is known exactly
    Exact(u8),
    /// The guess held no more copies than the secret
    AtLeast(u8),
}

/// Knowledge state derived from every guess so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knowledge {
    known: [Option<u8>; WORD_LEN],
    /// Bit `i` of `excluded[p]` set means letter `i` cannot sit at position `p`
    excluded: [u32; WORD_LEN],
    min_count: LetterCounts,
    max_count: LetterCounts,
}

impl Default for Knowledge {
    fn default() -> Self {
        Self::new()
    }
}

impl Knowledge {
    /// Neutral state: nothing confirmed, every letter allowed 0 to 5 times
    #[must_use]
    pub const fn new() -> Self {
        Self {
            known: [None; WORD_LEN],
            excluded: [0; WORD_LEN],
            min_count: [0; ALPHABET_LEN],
            max_count: [WORD_LEN as u8; ALPHABET_LEN],
        }
    }

    /// Confirmed letter per position, `None` where unknown
    #[must_use]
    pub const fn known_letters(&self) -> &[Option<u8>; WORD_LEN] {
        &self.known
    }

    /// Lower bound on each letter's occurrences
    #[must_use]
    pub const fn min_count(&self) -> &LetterCounts {
        &self.min_count
    }

    /// Upper bound on each letter's occurrences
    #[must_use]
    pub const fn max_count(&self) -> &LetterCounts {
        &self.max_count
    }

    #[must_use]
    pub const fn is_excluded(&self, position: usize, letter: u8) -> bool {
        self.excluded[position] & (1 << letter_index(letter)) != 0
    }

    /// Letters known not to occupy `position`, in alphabetical order
    pub fn excluded_at(&self, position: usize) -> impl Iterator<Item = u8> + '_ {
        (0..ALPHABET_LEN)
            .filter(move |&i| self.excluded[position] & (1 << i) != 0)
            .map(index_letter)
    }

    /// A letter whose count is pinned down: guessing it teaches nothing more
    #[inline]
    #[must_use]
    pub const fn is_determined(&self, letter_idx: usize) -> bool {
        self.min_count[letter_idx] == self.max_count[letter_idx]
    }

    /// Update from `guess` played against the known `secret`
    pub fn record(&mut self, guess: &Word, secret: &Word) {
        let matches = array::from_fn(|i| guess.char_at(i) == secret.char_at(i));
        let clues = array::from_fn(|i| {
            let guessed = guess.counts()[i];
            let actual = secret.counts()[i];
            if guessed > actual {
                CountClue::Exact(actual)
            } else {
                CountClue::AtLeast(guessed)
            }
        });

        self.apply(guess, &matches, &clues);
    }

    /// Update from feedback observed for `guess`, without knowing the secret
    ///
    /// A letter with any `Absent` mark was guessed too many times, so its true
    /// count is the number of its non-`Absent` marks. Otherwise the true count
    /// is at least the guessed count.
    pub fn record_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        let marks = feedback.marks();
        let matches = array::from_fn(|i| marks[i] == Mark::Correct);

        let mut revealed = [0u8; ALPHABET_LEN];
        let mut surplus = [false; ALPHABET_LEN];
        for (&letter, &mark) in guess.chars().iter().zip(marks) {
            match mark {
                Mark::Absent => surplus[letter_index(letter)] = true,
                Mark::Correct | Mark::Present => revealed[letter_index(letter)] += 1,
            }
        }

        let clues = array::from_fn(|i| {
            if surplus[i] {
                CountClue::Exact(revealed[i])
            } else {
                CountClue::AtLeast(guess.counts()[i])
            }
        });

        self.apply(guess, &matches, &clues);
    }

    /// One atomic decision per letter; bounds only ever narrow
    fn apply(
        &mut self,
        guess: &Word,
        matches: &[bool; WORD_LEN],
        clues: &[CountClue; ALPHABET_LEN],
    ) {
        for (position, &matched) in matches.iter().enumerate() {
            let letter = guess.char_at(position);
            if matched {
                self.known[position] = Some(letter);
            } else {
                self.excluded[position] |= 1 << letter_index(letter);
            }
        }

        for (i, clue) in clues.iter().enumerate() {
            match *clue {
                CountClue::Exact(count) => {
                    self.min_count[i] = self.min_count[i].max(count);
                    self.max_count[i] = self.max_count[i].min(count);
                }
                CountClue::AtLeast(count) => {
                    self.min_count[i] = self.min_count[i].max(count);
                }
            }
        }
    }

    /// Check whether `word` is consistent with everything known
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let counts_ok = word
            .counts()
            .iter()
            .zip(self.min_count.iter().zip(&self.max_count))
            .all(|(count, (min, max))| min <= count && count <= max);

        counts_ok
            && word.chars().iter().enumerate().all(|(position, &letter)| {
                self.known[position].is_none_or(|known| known == letter)
                    && !self.is_excluded(position, letter)
            })
    }
}
