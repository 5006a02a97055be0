//! Wordle Eliminator
//!
//! A Wordle constraint engine: it tracks what the feedback so far proves about
//! the secret word, narrows the dictionary to the words still possible, and
//! suggests guesses that cover the most informative letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_eliminator::solver::{Engine, Outcome};
//! use wordle_eliminator::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let mut engine = Engine::seeded(&dictionary, Some("women"), 42).quiet(true);
//!
//! let feedback = engine.annotate("shoal").unwrap();
//! println!("{}", feedback.to_emoji());
//!
//! assert_eq!(engine.process_guess("shoal").unwrap(), Outcome::Continuing);
//! let next = engine.suggest_eliminator(false).unwrap();
//! println!("Next guess: {next}");
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Constraint engine and strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
