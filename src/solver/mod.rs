//! Wordle solving engine
//!
//! The constraint engine, its knowledge state, the eliminator scoring and the
//! strategies that drive it.

mod engine;
mod knowledge;
pub mod play;
pub mod scoring;
pub mod strategy;

pub use engine::{DEFAULT_FIRST_GUESS, Engine, Outcome};
pub use knowledge::Knowledge;
pub use play::{GameRecord, Step, play_game};
pub use strategy::{
    EliminatorStrategy, FlagshipStrategy, RandomStrategy, Strategy, StrategyType,
};
