//! Wordle Eliminator - CLI
//!
//! Play Wordle, watch a strategy solve a word, evaluate strategies over the
//! dictionary, or get suggestions for a game played elsewhere.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};
use wordle_eliminator::{
    commands::{BatchConfig, SolveConfig, run_assist, run_batch, run_interactive, solve_word},
    output::{logger, print_batch_result, print_solve_result},
    solver::{Engine, StrategyType},
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_eliminator",
    about = "Wordle constraint engine with letter-elimination guess strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited word list (default: the embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for the random source, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Only print warnings and errors from the engine
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print per-letter bounds after every guess
    #[arg(long, global = true, conflicts_with = "quiet")]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a hidden word interactively (default)
    Play {
        /// Word to hide instead of a random one
        #[arg(short, long)]
        target: Option<String>,

        /// Do not show suggestions
        #[arg(long)]
        no_suggest: bool,
    },

    /// Let a strategy solve a word
    Solve {
        /// The target word (random if omitted)
        word: Option<String>,

        /// Strategy: flagship (default), eliminator, random
        #[arg(short, long, default_value = "flagship")]
        strategy: String,

        /// Show candidate counts for every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Evaluate a strategy over the dictionary
    Batch {
        /// Strategy: flagship (default), eliminator, random
        #[arg(short, long, default_value = "flagship")]
        strategy: String,

        /// Test every N-th dictionary word
        #[arg(long, default_value = "20")]
        step: usize,

        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Suggest guesses for a game played elsewhere
    Assist,
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => load_from_file(path)?,
        None => Dictionary::embedded()?,
    };
    log::debug!("Loaded {} words", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    logger::init(level)?;

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        target: None,
        no_suggest: false,
    });

    match command {
        Commands::Play { target, no_suggest } => {
            run_play_command(&dictionary, target.as_deref(), !no_suggest, cli.seed)
        }
        Commands::Solve {
            word,
            strategy,
            verbose,
        } => {
            let config = SolveConfig {
                target: word,
                strategy: StrategyType::from_name(&strategy),
                seed: cli.seed,
                quiet: cli.quiet,
            };
            let result = solve_word(&dictionary, &config)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Batch {
            strategy,
            step,
            limit,
        } => {
            let config = BatchConfig {
                strategy: StrategyType::from_name(&strategy),
                step,
                limit,
                seed: cli.seed.unwrap_or_default(),
                show_progress: !cli.quiet,
            };
            let result = run_batch(&dictionary, &config)?;
            print_batch_result(&result);
            Ok(())
        }
        Commands::Assist => run_assist_command(&dictionary, cli.seed),
    }
}

fn new_engine<'a>(
    dictionary: &'a Dictionary,
    target: Option<&str>,
    seed: Option<u64>,
) -> Engine<'a> {
    match seed {
        Some(seed) => Engine::seeded(dictionary, target, seed),
        None => Engine::new(dictionary, target),
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    target: Option<&str>,
    suggest: bool,
    seed: Option<u64>,
) -> Result<()> {
    // Tiles already show each turn
    let mut engine = new_engine(dictionary, target, seed).quiet(true);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    run_interactive(&mut engine, &mut stdin.lock(), &mut stdout, suggest)?;
    Ok(())
}

fn run_assist_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    let mut engine = new_engine(dictionary, None, seed).quiet(true);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    run_assist(&mut engine, &mut stdin.lock(), &mut stdout)?;
    Ok(())
}
