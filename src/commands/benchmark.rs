//! Benchmark command
//!
//! Plays every target word with a strategy, in parallel, and aggregates the
//! results.

use crate::autoplay::{LetterStrategy, play_out};
use crate::core::{Language, SecretWord};
use crate::game::{FixedWords, Game};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub games_won: usize,
    pub win_rate: f64,
    pub average_wrong_guesses: f64,
    /// Wrong-guess count of each won game → number of games
    pub distribution: BTreeMap<usize, usize>,
    /// Words the strategy failed to save
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of won games that `count` represents
    #[must_use]
    pub fn share_of_wins(&self, count: usize) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            count as f64 / self.games_won as f64
        }
    }
}

/// Run benchmark on a set of target words
///
/// Each game is independent, so targets are played in parallel. Pass
/// `show_progress` to draw a progress bar on stderr.
pub fn run_benchmark<S: LetterStrategy + Sync>(
    strategy: &S,
    targets: &[SecretWord],
    corpus: &[SecretWord],
    roster: &[Language],
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let played: Vec<_> = targets
        .par_iter()
        .map(|target| {
            let mut game = Game::new(FixedWords::single(target.clone()), roster);
            let result = play_out(&mut game, strategy, corpus);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let total_words = played.len();
    let mut games_won = 0;
    let mut total_wrong = 0;
    let mut distribution = BTreeMap::new();
    let mut lost_words = Vec::new();

    for game in &played {
        total_wrong += game.wrong_guesses;
        if game.won() {
            games_won += 1;
            *distribution.entry(game.wrong_guesses).or_insert(0) += 1;
        } else {
            lost_words.push(game.word.clone());
        }
    }

    let duration = start.elapsed();
    let ratio = |n: usize| {
        if total_words == 0 {
            0.0
        } else {
            n as f64 / total_words as f64
        }
    };

    info!(
        "benchmark: {games_won}/{total_words} won in {:.2}s",
        duration.as_secs_f64()
    );

    BenchmarkResult {
        total_words,
        games_won,
        win_rate: ratio(games_won),
        average_wrong_guesses: ratio(total_wrong),
        distribution,
        lost_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
