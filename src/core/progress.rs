//! Word state: what the player can see of the secret word
//!
//! Pure functions over a secret word and the set of guessed letters.

use super::{GuessedLetters, Letter};

/// Shown in place of a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Separator between positions in a progress string
pub const SEPARATOR: char = ' ';

/// Check if every letter of `secret` has been guessed
///
/// # Examples
/// ```
/// use hangman::core::{GuessedLetters, is_fully_revealed};
///
/// let guessed: GuessedLetters = "tac".chars().collect();
/// assert!(is_fully_revealed("cat", &guessed));
/// assert!(!is_fully_revealed("cats", &guessed));
/// ```
#[must_use]
pub fn is_fully_revealed(secret: &str, guessed: &GuessedLetters) -> bool {
    secret.chars().all(|c| guessed.contains_char(c))
}

/// Render the partially revealed word
///
/// Each position shows its letter if guessed, otherwise [`PLACEHOLDER`].
/// Positions are joined with single spaces.
///
/// # Examples
/// ```
/// use hangman::core::{GuessedLetters, render_progress};
///
/// let guessed: GuessedLetters = "abetd".chars().collect();
/// assert_eq!(render_progress("secret", &guessed), "_ e _ _ e t");
/// ```
#[must_use]
pub fn render_progress(secret: &str, guessed: &GuessedLetters) -> String {
    let mut progress = String::with_capacity(secret.len() * 2);

    for (i, c) in secret.chars().enumerate() {
        if i > 0 {
            progress.push(SEPARATOR);
        }
        progress.push(if guessed.contains_char(c) { c } else { PLACEHOLDER });
    }

    progress
}

/// Letters that have not been guessed yet, in alphabetical order
#[must_use]
pub fn available_letters(guessed: &GuessedLetters) -> Vec<Letter> {
    Letter::all()
        .filter(|&letter| !guessed.contains(letter))
        .collect()
}
