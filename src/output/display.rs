//! Display functions for the board and command results

use super::formatters::{colored_word_line, keyboard_line, lives_bar};
use crate::autoplay::PlayedGame;
use crate::commands::BenchmarkResult;
use crate::game::{GuessOutcome, Snapshot};
use crate::presentation::{announcement, keyboard, language_tiles, status_message, word_cells};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Write the whole board for line mode
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(out: &mut W, snapshot: &Snapshot<'_>) -> io::Result<()> {
    let facts = &snapshot.facts;

    writeln!(out, "{}", "─".repeat(60).cyan())?;

    let tiles: Vec<String> = language_tiles(snapshot)
        .iter()
        .map(|tile| {
            let name = tile.language.name;
            let styled: ColoredString = match tile.language.background_rgb() {
                Some((r, g, b)) if !tile.lost => name.on_truecolor(r, g, b),
                _ => name.normal(),
            };
            if tile.lost {
                format!("💀{}", name.bright_black().strikethrough())
            } else {
                format!(" {styled} ")
            }
        })
        .collect();
    writeln!(out, "{}", tiles.join(" "))?;

    writeln!(
        out,
        "Lives: [{}] {} left",
        lives_bar(facts.remaining_attempts(), facts.max_wrong_guesses, 16).green(),
        facts.remaining_attempts()
    )?;

    writeln!(out)?;
    writeln!(out, "    {}", colored_word_line(&word_cells(snapshot)))?;
    writeln!(out)?;
    writeln!(out, "{}", keyboard_line(&keyboard(snapshot)))?;

    if let Some(message) = status_message(snapshot) {
        writeln!(out)?;
        if let Some(headline) = message.headline() {
            let headline = if facts.is_game_won {
                headline.bright_green().bold()
            } else {
                headline.bright_red().bold()
            };
            writeln!(out, "{headline}")?;
        }
        writeln!(out, "{}", message.body().magenta())?;
    }

    writeln!(out, "{}", announcement(snapshot).to_line().bright_black())?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    Ok(())
}

/// Print the result of solving a word
pub fn print_solve_result(result: &PlayedGame, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.word.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        let letter = char::from(turn.letter.to_ascii_uppercase());
        let verdict = match turn.outcome {
            GuessOutcome::Correct => "✓".green(),
            GuessOutcome::Wrong => "✗".red(),
            GuessOutcome::Repeated => "·".normal(),
        };
        println!("\nTurn {}: {} {}", i + 1, letter, verdict);

        if verbose {
            println!("  Candidates:    {}", turn.candidates_before);
            println!("  Wrong so far:  {}", turn.wrong_guess_count);
        }
    }

    println!();
    if result.won() {
        println!(
            "{}",
            format!(
                "✅ Saved with {} wrong {}!",
                result.wrong_guesses,
                if result.wrong_guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Lost after {} guesses", result.turns.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0).bright_yellow().bold()
    );
    println!(
        "   Avg wrong:        {}",
        format!("{:.2}", result.average_wrong_guesses).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong guesses in won games:".bright_cyan().bold());
    for (&wrong, &count) in &result.distribution {
        let pct = result.share_of_wins(count) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {wrong}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.lost_words.is_empty() {
        println!("\n💀 {}", "Lost to Assembly:".red().bold());
        for word in result.lost_words.iter().take(20) {
            println!("   {}", word.to_uppercase());
        }
        if result.lost_words.len() > 20 {
            println!("   ... and {} more", result.lost_words.len() - 20);
        }
    }
}
