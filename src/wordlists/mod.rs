//! Word lists for Wordle solving
//!
//! Provides the [`Dictionary`] plus the embedded default list compiled into
//! the binary, and a loader for newline-delimited word files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
