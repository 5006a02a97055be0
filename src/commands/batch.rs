//! Batch evaluation command
//!
//! Plays a strategy against a regular sample of the dictionary and
//! summarizes how many attempts each word took.

use crate::error::SolverError;
use crate::solver::{Engine, Strategy, StrategyType, play_game};
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a batch run
pub struct BatchConfig {
    pub strategy: StrategyType,
    /// Take every `step`-th dictionary word
    pub step: usize,
    /// Stop after this many words
    pub limit: Option<usize>,
    /// Game `i` is seeded with `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyType::default(),
            step: 20,
            limit: None,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Result of a batch run
pub struct BatchResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub average_attempts: f64,
    pub std_dev: f64,
    pub median: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

/// Run the configured strategy on every sampled word
///
/// Games are independent and run in parallel, each with its own engine.
///
/// # Errors
///
/// Returns an error if any game fails, which means the strategy left the
/// candidate set empty or exhausted its attempts.
pub fn run_batch(dictionary: &Dictionary, config: &BatchConfig) -> Result<BatchResult> {
    let targets: Vec<&str> = dictionary
        .words()
        .iter()
        .step_by(config.step.max(1))
        .take(config.limit.unwrap_or(usize::MAX))
        .map(|word| word.text())
        .collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb.set_message(config.strategy.name());
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let attempts = targets
        .par_iter()
        .enumerate()
        .map(|(i, &target)| {
            let seed = config.seed.wrapping_add(i as u64);
            let mut engine = Engine::seeded(dictionary, Some(target), seed).quiet(true);
            let record = play_game(&mut engine, &config.strategy)?;
            pb.inc(1);
            Ok(record.attempts())
        })
        .collect::<Result<Vec<usize>, SolverError>>()?;

    pb.finish_and_clear();

    Ok(summarize(config.strategy.name(), &attempts, start.elapsed()))
}

fn summarize(strategy: &'static str, attempts: &[usize], duration: Duration) -> BatchResult {
    let total_words = attempts.len();

    let mut distribution = BTreeMap::new();
    for &count in attempts {
        *distribution.entry(count).or_insert(0) += 1;
    }

    if total_words == 0 {
        return BatchResult {
            strategy,
            total_words,
            average_attempts: 0.0,
            std_dev: 0.0,
            median: 0.0,
            min_attempts: 0,
            max_attempts: 0,
            distribution,
            duration,
        };
    }

    let n = total_words as f64;
    let average_attempts = attempts.iter().sum::<usize>() as f64 / n;
    let variance = attempts
        .iter()
        .map(|&count| (count as f64 - average_attempts).powi(2))
        .sum::<f64>()
        / n;

    let mut sorted = attempts.to_vec();
    sorted.sort_unstable();
    let middle = total_words / 2;
    let median = if total_words % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) as f64 / 2.0
    } else {
        sorted[middle] as f64
    };

    BatchResult {
        strategy,
        total_words,
        average_attempts,
        std_dev: variance.sqrt(),
        median,
        min_attempts: sorted[0],
        max_attempts: sorted[total_words - 1],
        distribution,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EliminatorStrategy, RandomStrategy};

    fn quiet_config(strategy: StrategyType) -> BatchConfig {
        BatchConfig {
            strategy,
            step: 50,
            limit: Some(20),
            seed: 3,
            show_progress: false,
        }
    }

    #[test]
    fn batch_runs_every_strategy() {
        let dictionary = Dictionary::embedded().unwrap();

        for strategy in [
            StrategyType::Random(RandomStrategy),
            StrategyType::Eliminator(EliminatorStrategy),
            StrategyType::default(),
        ] {
            let result = run_batch(&dictionary, &quiet_config(strategy)).unwrap();

            assert_eq!(result.strategy, strategy.name());
            assert_eq!(result.total_words, 20);
            assert!(result.min_attempts >= 1);
            assert!(result.average_attempts >= result.min_attempts as f64);
            assert!(result.average_attempts <= result.max_attempts as f64);
        }
    }

    #[test]
    fn batch_distribution_sums_correctly() {
        let dictionary = Dictionary::embedded().unwrap();
        let result = run_batch(&dictionary, &quiet_config(StrategyType::default())).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
    }

    #[test]
    fn batch_is_reproducible_with_seed() {
        let dictionary = Dictionary::embedded().unwrap();
        let config = quiet_config(StrategyType::Random(RandomStrategy));

        let first = run_batch(&dictionary, &config).unwrap();
        let second = run_batch(&dictionary, &config).unwrap();
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn summarize_statistics() {
        let result = summarize("flagship", &[2, 3, 3, 4, 5, 7], Duration::ZERO);

        assert_eq!(result.total_words, 6);
        assert!((result.average_attempts - 4.0).abs() < 1e-12);
        assert!((result.median - 3.5).abs() < 1e-12);
        assert!((result.std_dev - (16.0_f64 / 6.0).sqrt()).abs() < 1e-12);
        assert_eq!(result.min_attempts, 2);
        assert_eq!(result.max_attempts, 7);
        assert_eq!(result.distribution.get(&3), Some(&2));
    }

    #[test]
    fn summarize_empty() {
        let result = summarize("random", &[], Duration::ZERO);
        assert_eq!(result.total_words, 0);
        assert!(result.distribution.is_empty());
    }
}
