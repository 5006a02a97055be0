//! Assist mode
//!
//! Helps with a game played elsewhere: the player reports the feedback each
//! guess received and the engine suggests the next word.

use crate::core::Feedback;
use crate::error::SolverError;
use crate::output::formatters::feedback_tiles;
use crate::solver::{Engine, FlagshipStrategy, Outcome, Strategy};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Suggest guesses for an external game, reading feedback from `input`
///
/// Each line is either `<feedback>` for the suggested word or
/// `<word> <feedback>` when a different word was played. Feedback uses
/// `G`/`Y`/`-` or the emoji squares.
///
/// Returns the number of attempts once a guess is reported solved, or `None`
/// if the player quits, the input ends, or the reported feedback is
/// contradictory.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_assist<R: Rng, I: BufRead, W: Write>(
    engine: &mut Engine<'_, R>,
    input: &mut I,
    output: &mut W,
) -> Result<Option<usize>> {
    let strategy = FlagshipStrategy::default();

    writeln!(
        output,
        "Enter the feedback for each guess (G/Y/-), optionally preceded by the word played."
    )?;
    writeln!(output, "Type 'quit' to stop.\n")?;

    loop {
        let suggestion = match strategy.next_guess(engine) {
            Ok(word) => word,
            Err(SolverError::InconsistentState) => {
                writeln!(
                    output,
                    "{}",
                    "No words match that feedback. Check the marks entered.".red()
                )?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let remaining = engine.candidates().len();
        writeln!(
            output,
            "Try {} ({remaining} candidates left)",
            suggestion.text().to_uppercase().bright_cyan().bold()
        )?;
        if remaining <= 10 {
            let words: Vec<&str> = engine.candidates().iter().map(|w| w.text()).collect();
            writeln!(output, "  {}", words.join(" "))?;
        }

        let (guess, feedback) = loop {
            write!(output, "Feedback: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(None);
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let parsed = match tokens.as_slice() {
                [] => continue,
                [cmd] if matches!(cmd.to_lowercase().as_str(), "quit" | "q" | "exit") => {
                    return Ok(None);
                }
                [marks] => marks
                    .parse::<Feedback>()
                    .map(|feedback| (suggestion.text().to_string(), feedback)),
                [word, marks] => marks
                    .parse::<Feedback>()
                    .map(|feedback| ((*word).to_string(), feedback)),
                _ => Err(format!(
                    "Expected '<feedback>' or '<word> <feedback>', got '{}'",
                    line.trim()
                )),
            };

            match parsed {
                Ok(pair) => break pair,
                Err(message) => writeln!(output, "{message}")?,
            }
        };

        let outcome = match engine.process_feedback(&guess, feedback) {
            Ok(outcome) => outcome,
            Err(e @ SolverError::InvalidWord { .. }) => {
                writeln!(output, "{e}")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(&(word, feedback)) = engine.history().last() {
            writeln!(output, "{}", feedback_tiles(word.text(), feedback))?;
        }

        if outcome == Outcome::Solved {
            writeln!(
                output,
                "\n{}",
                format!("Solved in {} attempts", engine.attempts())
                    .green()
                    .bold()
            )?;
            return Ok(Some(engine.attempts()));
        }
    }
}
