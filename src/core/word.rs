//! Wordle word representation
//!
//! A Word stores a 5-letter word along with its letter-count profile.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet (`a`..=`z`)
pub const ALPHABET_LEN: usize = 26;

/// Occurrence count per letter, indexed by `letter - b'a'`
pub type LetterCounts = [u8; ALPHABET_LEN];

/// Index of a lowercase ASCII letter into a [`LetterCounts`] table
///
/// # Panics
/// Panics in debug mode if `letter` is not in `b'a'..=b'z'`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// Letter for an index into a [`LetterCounts`] table
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_LEN);
    b'a' + index as u8
}

/// A 5-letter Wordle word with its letter-count profile
///
/// The profile is computed once at construction and reused by filtering and scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
    counts: LetterCounts,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
    #[error("word is not in the dictionary")]
    NotInDictionary,
}

/// Strip all whitespace and lowercase
///
/// `" W O M E N "` becomes `"women"`. No length or dictionary check happens here.
#[must_use]
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::Word;
    ///
    /// let word = Word::new("shoal").unwrap();
    /// assert_eq!(word.text(), "shoal");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0al").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LEN];
        chars.copy_from_slice(text.as_bytes());

        let mut counts = [0u8; ALPHABET_LEN];
        for &ch in &chars {
            counts[letter_index(ch)] += 1;
        }

        Ok(Self {
            text,
            chars,
            counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Letter-count profile of the word
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Distinct letters of the word, as alphabet indices
    ///
    /// Duplicated letters are yielded once.
    pub fn distinct_letters(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(index, _)| index)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
