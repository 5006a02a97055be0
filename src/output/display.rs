//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles};
use crate::commands::{BatchResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let record = &result.record;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        record.secret.to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in record.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {turn}: {}  {}",
            feedback_tiles(&step.word, step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {} {}!",
            record.attempts(),
            if record.attempts() == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    );
}

/// Print the summary of a batch run
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BATCH RESULTS:".bright_cyan().bold(),
        result.strategy.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average attempts: {}",
        format!("{:.3}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Std deviation:    {:.3}", result.std_dev);
    println!("   Median:           {:.1}", result.median);
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.total_words == 0 {
        return;
    }

    let peak = result.distribution.values().copied().max().unwrap_or(0);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&attempts, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(count as f64, peak as f64, 40);
        println!("   {attempts:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
