//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words with their
//! letter-count profiles and the feedback a guess receives.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{
    ALPHABET_LEN, LetterCounts, WORD_LEN, Word, WordError, clean, index_letter, letter_index,
};
