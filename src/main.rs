//! Hangman - CLI
//!
//! Guess the secret word one letter at a time; `*` lists the dictionary
//! words that still fit.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    commands::Session,
    core::Word,
    game::Game,
    logging::init_tracing,
    wordlists::{WORDS, choose_word, load_from_file, words_from_slice},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman with hints: guess the word before you run out of lives",
    version,
    author
)]
struct Cli {
    /// Wordlist: 'builtin' (default) or path to a file of whitespace-separated words
    #[arg(short = 'w', long, default_value = "builtin")]
    wordlist: String,

    /// Seed for picking the secret word (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "builtin" => {
            let words = words_from_slice(WORDS);
            info!(count = words.len(), "using built-in word list");
            Ok(words)
        }
        path => load_from_file(path)
            .with_context(|| format!("cannot start without words from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    println!("Loading words...");
    let dictionary = load_dictionary(&cli.wordlist)?;
    println!("  {} words loaded.", dictionary.len());

    let secret = match cli.seed {
        Some(seed) => choose_word(&dictionary, &mut StdRng::seed_from_u64(seed)),
        None => choose_word(&dictionary, &mut rand::rng()),
    }
    .context("word list is empty")?
    .clone();

    let mut game = Game::new(secret, &dictionary);
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    session.play(&mut game)?;

    Ok(())
}
