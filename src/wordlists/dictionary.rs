//! The ordered, immutable word list every engine validates against

use super::WORDS;
use crate::core::{Word, WordError, clean};
use crate::error::SolverError;
use rustc_hash::FxHashMap;

/// Ordered set of valid words
///
/// Order is significant: eliminator ties are broken by first occurrence.
/// A `Dictionary` is never empty and holds no duplicates. It is read-only
/// once built, so any number of engines can borrow the same instance.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from words, keeping the first occurrence of duplicates
    ///
    /// # Errors
    /// Returns `SolverError::Configuration` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, SolverError> {
        if words.is_empty() {
            return Err(SolverError::Configuration(
                "dictionary contains no words".to_string(),
            ));
        }

        let mut unique = Vec::with_capacity(words.len());
        let mut index = FxHashMap::default();
        for word in words {
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), unique.len());
                unique.push(word);
            }
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// Build a dictionary from string slices
    ///
    /// # Errors
    /// Returns `SolverError::Configuration` if any entry is not a five-letter
    /// alphabetic word, or if `slice` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_slice(&["shoal", "books"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(Dictionary::from_slice(&["shoal", "toolong"]).is_err());
    /// ```
    pub fn from_slice(slice: &[&str]) -> Result<Self, SolverError> {
        let words = slice
            .iter()
            .map(|&s| {
                Word::new(s).map_err(|e| SolverError::Configuration(format!("'{s}': {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is malformed, which the build script rejects.
    pub fn embedded() -> Result<Self, SolverError> {
        Self::from_slice(WORDS)
    }

    /// All words in their fixed order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up an already-normalized word
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Strip whitespace, lowercase and check the result against the dictionary
    ///
    /// This is the single validation gate for user-supplied words. It never mutates anything.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if the cleaned input is not five ASCII
    /// letters or is not in the dictionary.
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_slice(&["women", "death"]).unwrap();
    /// assert_eq!(dictionary.normalize(" W o M e N ").unwrap().text(), "women");
    /// assert!(dictionary.normalize("abcde").is_err());
    /// ```
    pub fn normalize(&self, raw: &str) -> Result<&Word, SolverError> {
        let cleaned = clean(raw);
        let word = Word::new(cleaned).map_err(|e| SolverError::invalid_word(raw, e))?;
        self.get(word.text())
            .ok_or_else(|| SolverError::invalid_word(raw, WordError::NotInDictionary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_slice(&["women", "death", "abyss", "shoal"]).unwrap()
    }

    #[test]
    fn empty_dictionary_is_configuration_error() {
        assert!(matches!(
            Dictionary::new(Vec::new()),
            Err(SolverError::Configuration(_))
        ));
        assert!(matches!(
            Dictionary::from_slice(&[]),
            Err(SolverError::Configuration(_))
        ));
    }

    #[test]
    fn malformed_entry_is_configuration_error() {
        assert!(matches!(
            Dictionary::from_slice(&["women", "abc"]),
            Err(SolverError::Configuration(_))
        ));
        assert!(matches!(
            Dictionary::from_slice(&["w0men"]),
            Err(SolverError::Configuration(_))
        ));
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let dictionary = Dictionary::from_slice(&["death", "women", "DEATH"]).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "death");
        assert_eq!(dictionary.words()[1].text(), "women");
    }

    #[test]
    fn normalize_accepts_case_and_space_variants() {
        let dictionary = sample();
        for (raw, expected) in [
            ("wOmen", "women"),
            ("DeatH", "death"),
            ("ABYSS", "abyss"),
            ("W O M E N", "women"),
            ("d e A tH", "death"),
            ("a b y s s", "abyss"),
        ] {
            assert_eq!(dictionary.normalize(raw).unwrap().text(), expected);
        }
    }

    #[test]
    fn normalize_rejects_unknown_words() {
        let dictionary = sample();
        for raw in ["aaaaa", "abcde", "greip", "AAAAA", "aBCdE", "G re ip"] {
            assert!(matches!(
                dictionary.normalize(raw),
                Err(SolverError::InvalidWord {
                    reason: WordError::NotInDictionary,
                    ..
                })
            ));
        }
    }

    #[test]
    fn normalize_rejects_wrong_length() {
        let dictionary = sample();
        assert!(matches!(
            dictionary.normalize("shoals"),
            Err(SolverError::InvalidWord {
                reason: WordError::InvalidLength(6),
                ..
            })
        ));
        assert!(dictionary.normalize("").is_err());
    }

    #[test]
    fn normalize_is_idempotent_over_embedded_list() {
        let dictionary = Dictionary::embedded().unwrap();
        for word in dictionary.words() {
            let once = dictionary.normalize(word.text()).unwrap();
            let twice = dictionary.normalize(once.text()).unwrap();
            assert_eq!(once, twice);
            assert_eq!(once, word);
            assert_eq!(dictionary.normalize(&word.text().to_uppercase()).unwrap(), word);
        }
    }
}
