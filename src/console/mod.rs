//! Interactive console mode
//!
//! Text-based front-end over the game state machine: one puzzle at a time,
//! guesses read from stdin, progress printed after every attempt.

use crate::dictionary::DictionaryIndex;
use crate::engine::WordEngine;
use crate::game::{self, GameState, GuessOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive console game
///
/// # Errors
///
/// Returns an error if a puzzle cannot be created for the requested lengths
/// or if reading user input fails.
pub fn run(
    index: &DictionaryIndex,
    word_length: usize,
    min_sub_length: usize,
) -> Result<(), String> {
    let engine = WordEngine::new(index);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Jumble - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble the letters and find the words hidden inside them.");
    println!("Each wrong or right guess reshuffles the letters.\n");
    println!("Commands: 'quit' to exit, 'new' for a new puzzle\n");

    let mut state = new_puzzle(&engine, word_length, min_sub_length)?;

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Letters: {}   ({} of {} words found)",
            spaced_upper(state.scramble()).bright_yellow().bold(),
            state.guessed_count(),
            state.total_words()
        );
        if !state.guessed_words().is_empty() {
            println!("Found:   {}", state.guessed_words().join(", ").green());
        }

        let input = get_user_input("Your guess")?;
        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                state = new_puzzle(&engine, word_length, min_sub_length)?;
                println!("\n🔄 New puzzle!\n");
                continue;
            }
            _ => {}
        }

        match state.guess(&input) {
            GuessOutcome::Correct => {
                println!("\n{}\n", "✓ Guessed correctly.".green().bold());
            }
            GuessOutcome::Incorrect => {
                println!("\n{}\n", "✗ Guessed incorrectly.".red());
            }
            GuessOutcome::AllGuessed => {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!(
                    "{}",
                    "  🎉 All words guessed!  ".bright_green().bold()
                );
                println!(
                    "  The word was {}.",
                    state.original().to_uppercase().bright_yellow().bold()
                );
                println!("{}\n", "═".repeat(60).bright_cyan());

                match get_user_input("Play again? (yes/no)")?.as_str() {
                    "yes" | "y" => {
                        state = new_puzzle(&engine, word_length, min_sub_length)?;
                        println!("\n🔄 New puzzle!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn new_puzzle(
    engine: &WordEngine<'_>,
    word_length: usize,
    min_sub_length: usize,
) -> Result<GameState, String> {
    let state = game::new_game(engine, word_length, min_sub_length)
        .map_err(|e| format!("Cannot create puzzle: {e}"))?;

    println!(
        "New puzzle: {} letters hiding {} words (minimum length {}).\n",
        state.original().len(),
        state.total_words(),
        min_sub_length
    );
    Ok(state)
}

fn spaced_upper(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(|c| format!("{c} "))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_upper_formats_letters() {
        assert_eq!(spaced_upper("owl"), "O W L");
        assert_eq!(spaced_upper("a"), "A");
    }
}
