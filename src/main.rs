//! Assembly: Endgame - CLI
//!
//! Hangman against a roster of programming languages, with TUI and line modes
//! plus an autoplayer for solving and benchmarking.

use anyhow::{Context, Result, bail};
use assembly_endgame::{
    autoplay::StrategyType,
    commands::{SolveConfig, run_benchmark, run_simple, solve_word},
    core::{LANGUAGES, SecretWord},
    game::{Game, RandomWords},
    logging::init_logger,
    output::{print_benchmark_result, print_solve_result},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assembly_endgame",
    about = "Guess the word before every programming language is lost to Assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Autoplay strategy: frequency (default) or alphabet
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret word selection (reproducible sessions)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,

    /// Let the autoplayer guess a specific word
    Solve {
        /// The secret word to play
        word: String,

        /// Show candidate counts for every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Autoplay every word of the word list
    Benchmark {
        /// Only play the first N words
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

/// Load the secret word corpus based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<SecretWord>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}"))?,
    };

    if words.is_empty() {
        bail!("Word list '{wordlist_mode}' contains no usable words");
    }
    info!("loaded {} words from {wordlist_mode}", words.len());
    Ok(words)
}

fn word_source(words: Vec<SecretWord>, seed: Option<u64>) -> Result<RandomWords> {
    let source = match seed {
        Some(seed) => RandomWords::seeded(words, seed),
        None => RandomWords::new(words),
    };
    source.context("Word list is empty")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.log_file.as_deref()) {
        eprintln!("Warning: {e:#}");
    }

    let words = load_words(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, cli.seed),
        Commands::Simple => run_simple_command(words, cli.seed),
        Commands::Solve { word, verbose } => run_solve_command(&cli.strategy, word, verbose, &words),
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, count, &words);
            Ok(())
        }
    }
}

fn run_play_command(words: Vec<SecretWord>, seed: Option<u64>) -> Result<()> {
    use assembly_endgame::interactive::{App, run_tui};

    let game = Game::new(word_source(words, seed)?, LANGUAGES);
    run_tui(App::new(game))
}

fn run_simple_command(words: Vec<SecretWord>, seed: Option<u64>) -> Result<()> {
    let mut game = Game::new(word_source(words, seed)?, LANGUAGES);
    run_simple(&mut game)
}

fn run_solve_command(
    strategy_name: &str,
    word: String,
    verbose: bool,
    words: &[SecretWord],
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let result = solve_word(SolveConfig::new(word, LANGUAGES), &strategy, words)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, count: Option<usize>, words: &[SecretWord]) {
    let targets = &words[..count.unwrap_or(words.len()).min(words.len())];
    println!(
        "Running benchmark on {} words with the {strategy_name} strategy...",
        targets.len()
    );

    let strategy = StrategyType::from_name(strategy_name);
    let result = run_benchmark(&strategy, targets, words, LANGUAGES, true);
    print_benchmark_result(&result);
}
