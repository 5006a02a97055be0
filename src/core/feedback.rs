//! Wordle feedback calculation and representation
//!
//! Feedback is one [`Mark`] per position:
//! - `Correct` (green): letter in the right position
//! - `Present` (yellow): letter in the word, wrong position
//! - `Absent` (gray): no unconsumed occurrence of the letter left

use super::word::{ALPHABET_LEN, WORD_LEN, Word, letter_index};
use std::fmt;

/// Coloring of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LEN]);

    /// Marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Correct)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those letters from the secret
    /// 2. Second pass: left to right, mark `Present` while the secret still has an
    ///    unconsumed occurrence of the letter, `Absent` otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("books").unwrap();
    /// let secret = Word::new("shoal").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &secret);
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Absent, Mark::Absent, Mark::Correct, Mark::Absent, Mark::Present]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut available: [u8; ALPHABET_LEN] = *secret.counts();

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                *mark = Mark::Correct;
                available[letter_index(letter)] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            let remaining = &mut available[letter_index(guess.char_at(i))];
            if *remaining > 0 {
                *mark = Mark::Present;
                *remaining -= 1;
            }
        }

        Self(marks)
    }

    /// Convert feedback to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            let ch = match mark {
                Mark::Correct => 'G',
                Mark::Present => 'Y',
                Mark::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/'.'/⬜/⬛ for absent
impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LEN {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '.' | '⬜' | '⬛' => Mark::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(marks))
    }
}
