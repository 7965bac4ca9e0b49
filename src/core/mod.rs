//! Core domain types for hangman
//!
//! Letters, words, the guessed-letter set and the pure functions that
//! reveal the secret word and match dictionary words against it.
//! Nothing in here does I/O.

mod guessed;
mod letter;
mod matcher;
mod progress;
mod word;

pub use guessed::GuessedLetters;
pub use letter::Letter;
pub use matcher::{list_possible_matches, matches};
pub use progress::{PLACEHOLDER, SEPARATOR, available_letters, is_fully_revealed, render_progress};
pub use word::{Word, WordError};
