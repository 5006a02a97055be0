//! Word list loading utilities
//!
//! Reads newline-delimited word files into a [`Dictionary`].

use super::Dictionary;
use crate::core::Word;
use crate::error::SolverError;
use std::fs;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Lines are trimmed and blank lines skipped.
///
/// # Errors
///
/// Returns `SolverError::Configuration` if the file cannot be read, if any
/// line is not a five-letter word, or if the file holds no words.
///
/// # Examples
/// ```no_run
/// use wordle_eliminator::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        SolverError::Configuration(format!("cannot read {}: {e}", path.display()))
    })?;

    parse_words(&content)
}

/// Parse newline-delimited words into a dictionary
///
/// # Errors
///
/// Returns `SolverError::Configuration` naming the first malformed line, or
/// if no words are present.
pub fn parse_words(content: &str) -> Result<Dictionary, SolverError> {
    let words = content
        .lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| {
            Word::new(line)
                .map_err(|e| SolverError::Configuration(format!("line {number}: '{line}': {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Dictionary::new(words)
}
