//! Interactive play mode
//!
//! The player guesses a hidden word line by line, optionally with suggestions.

use crate::core::Word;
use crate::error::SolverError;
use crate::output::formatters::feedback_tiles;
use crate::solver::{Engine, Outcome};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Play against the engine's secret, reading guesses from `input`
///
/// Returns the number of attempts when solved, or `None` if the player quits
/// or the input ends. Invalid words are reported and do not count.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_interactive<R: Rng, I: BufRead, W: Write>(
    engine: &mut Engine<'_, R>,
    input: &mut I,
    output: &mut W,
    suggest: bool,
) -> Result<Option<usize>> {
    writeln!(output, "Guess the five-letter word. Type 'quit' to give up.\n")?;

    loop {
        if suggest && let Ok(word) = suggestion(engine) {
            writeln!(
                output,
                "Suggestion: {} ({} candidates remain)",
                word.text().to_uppercase().bright_cyan(),
                engine.candidates().len()
            )?;
        }

        write!(output, "Guess {}: ", engine.attempts() + 1)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        let guess = line.trim();
        match guess.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                let secret = engine.secret().text().to_uppercase();
                writeln!(output, "The word was {secret}")?;
                return Ok(None);
            }
            _ => {}
        }

        let outcome = match engine.process_guess(guess) {
            Ok(outcome) => outcome,
            Err(SolverError::InvalidWord { input: raw, .. }) => {
                writeln!(output, "'{raw}' is not a valid word, try again")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(&(word, feedback)) = engine.history().last() {
            writeln!(
                output,
                "{}  {}",
                feedback_tiles(word.text(), feedback),
                feedback.to_emoji()
            )?;
        }

        if outcome == Outcome::Solved {
            let attempts = engine.attempts();
            writeln!(
                output,
                "\n{}",
                format!(
                    "Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
            return Ok(Some(attempts));
        }
    }
}

/// The default opener first, then the best eliminator from the whole dictionary
fn suggestion<'a, R: Rng>(engine: &Engine<'a, R>) -> Result<&'a Word, SolverError> {
    if engine.attempts() == 0
        && let Ok(opener) = engine.normalize_and_validate(engine.suggest_default_first_guess())
    {
        return Ok(opener);
    }
    engine.suggest_eliminator(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&["women", "death", "abyss", "shoal", "books", "boost"]).unwrap()
    }

    fn play(
        dictionary: &Dictionary,
        script: &str,
        suggest: bool,
    ) -> (Option<usize>, usize, String) {
        let mut engine = Engine::seeded(dictionary, Some("books"), 9).quiet(true);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        let result = run_interactive(&mut engine, &mut input, &mut output, suggest).unwrap();
        (result, engine.attempts(), String::from_utf8(output).unwrap())
    }

    #[test]
    fn solves_and_reports_attempts() {
        let dictionary = dictionary();
        let (result, attempts, output) = play(&dictionary, "shoal\nbooks\n", false);

        assert_eq!(result, Some(2));
        assert_eq!(attempts, 2);
        assert!(output.contains("🟨⬜🟩⬜⬜"));
        assert!(output.contains("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn invalid_words_do_not_count() {
        let dictionary = dictionary();
        let (result, _, output) = play(&dictionary, "xyzzy\nbook\n\n  BOOKS \n", false);

        assert_eq!(result, Some(1));
        assert_eq!(output.matches("not a valid word").count(), 2);
    }

    #[test]
    fn quit_and_end_of_input_give_up() {
        let dictionary = dictionary();

        let (result, attempts, output) = play(&dictionary, "death\nquit\nbooks\n", false);
        assert_eq!(result, None);
        assert_eq!(attempts, 1);
        assert!(output.contains("BOOKS"));

        let (result, attempts, _) = play(&dictionary, "death\n", false);
        assert_eq!(result, None);
        assert_eq!(attempts, 1);
    }

    #[test]
    fn suggestions_start_with_default_first_guess() {
        let dictionary = dictionary();
        let (result, _, output) = play(&dictionary, "books\n", true);

        assert_eq!(result, Some(1));
        assert!(output.contains("SHOAL"));
    }

    #[test]
    fn later_suggestions_search_the_whole_dictionary() {
        let dictionary = dictionary();
        let mut engine = Engine::seeded(&dictionary, Some("books"), 9).quiet(true);

        engine.process_guess("death").unwrap();
        // Few candidates left, but the search is not restricted to them
        assert!(engine.candidates().len() <= 3);
        assert_eq!(suggestion(&engine).unwrap(), engine.suggest_eliminator(false).unwrap());

        engine.process_guess("shoal").unwrap();
        assert_eq!(suggestion(&engine).unwrap(), engine.suggest_eliminator(false).unwrap());
    }
}
