//! Jumble - CLI
//!
//! Word jumble puzzle with console and HTTP server modes, plus dictionary
//! query commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use jumble::{
    console,
    dictionary::{DictionaryIndex, loader},
    engine::WordEngine,
    server,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Word jumble puzzle engine with console and HTTP front-ends",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the dictionary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "data/words.txt")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console game (default)
    Play {
        /// Length of the word to unscramble
        #[arg(long, default_value = "6")]
        word_length: usize,

        /// Minimum length of hidden sub-words
        #[arg(long, default_value = "3")]
        min_sub_length: usize,
    },

    /// Run the HTTP game API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "9000")]
        port: u16,
    },

    /// Scramble a dictionary word's letters
    Scramble {
        /// The word to scramble
        word: String,
    },

    /// List all palindrome words in the dictionary
    Palindromes,

    /// List all words beginning with a prefix
    Prefix {
        /// The prefix to match
        prefix: String,
    },

    /// Search words by first/last character and/or length
    Search {
        /// First character of the word
        #[arg(short, long)]
        starts_with: Option<char>,

        /// Last character of the word
        #[arg(short, long)]
        ends_with: Option<char>,

        /// Exact word length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List the words hidden inside a seed word
    Subwords {
        /// The seed word
        word: String,

        /// Minimum sub-word length
        #[arg(short, long, default_value = "3")]
        min_length: usize,
    },

    /// Check whether a word exists in the dictionary
    Exists {
        /// The word to check
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let index = loader::load_file(&cli.wordlist)
        .with_context(|| format!("loading dictionary from {}", cli.wordlist))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        word_length: 6,
        min_sub_length: 3,
    });

    match command {
        Commands::Play {
            word_length,
            min_sub_length,
        } => console::run(&index, word_length, min_sub_length).map_err(|e| anyhow::anyhow!(e)),
        Commands::Serve { port } => run_serve_command(index, port),
        Commands::Scramble { word } => run_scramble_command(&index, &word),
        Commands::Palindromes => {
            run_palindromes_command(&index);
            Ok(())
        }
        Commands::Prefix { prefix } => {
            run_prefix_command(&index, &prefix);
            Ok(())
        }
        Commands::Search {
            starts_with,
            ends_with,
            length,
        } => {
            run_search_command(&index, starts_with, ends_with, length);
            Ok(())
        }
        Commands::Subwords { word, min_length } => {
            run_subwords_command(&index, &word, min_length);
            Ok(())
        }
        Commands::Exists { word } => {
            run_exists_command(&index, &word);
            Ok(())
        }
    }
}

fn run_serve_command(index: DictionaryIndex, port: u16) -> Result<()> {
    tracing_subscriber::fmt::init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    runtime
        .block_on(server::run(Arc::new(index), port))
        .context("running game API server")
}

fn run_scramble_command(index: &DictionaryIndex, word: &str) -> Result<()> {
    let engine = WordEngine::new(index);
    let scrambled = engine.scramble(word)?;
    println!("{scrambled}");
    Ok(())
}

fn run_palindromes_command(index: &DictionaryIndex) {
    let engine = WordEngine::new(index);
    let palindromes = engine.palindromes();

    print_word_list(&palindromes, "No palindrome words in the dictionary.");
}

fn run_prefix_command(index: &DictionaryIndex, prefix: &str) {
    let engine = WordEngine::new(index);
    let words = engine.words_with_prefix(prefix);

    print_word_list(&words, "No words match.");
}

fn run_search_command(
    index: &DictionaryIndex,
    starts_with: Option<char>,
    ends_with: Option<char>,
    length: Option<usize>,
) {
    let engine = WordEngine::new(index);
    let words = engine.search(starts_with, ends_with, length);

    print_word_list(&words, "No words match.");
}

fn run_subwords_command(index: &DictionaryIndex, word: &str, min_length: usize) {
    let engine = WordEngine::new(index);
    let words = engine.sub_words(word, min_length);

    print_word_list(&words, "No sub-words found.");
}

fn run_exists_command(index: &DictionaryIndex, word: &str) {
    let engine = WordEngine::new(index);
    if engine.exists(word) {
        println!("{}", format!("'{}' is in the dictionary.", word.trim()).green());
    } else {
        println!("{}", format!("'{}' is not in the dictionary.", word.trim()).red());
    }
}

fn print_word_list(words: &[&str], empty_message: &str) {
    if words.is_empty() {
        println!("{}", empty_message.yellow());
        return;
    }
    for word in words {
        println!("{word}");
    }
    println!("\n{} words", words.len());
}
