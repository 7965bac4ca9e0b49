//! Hint matching against a progress string
//!
//! A dictionary word is still a candidate when:
//! - it has one letter per progress position
//! - every revealed letter matches exactly
//! - no hidden position holds a letter that was already guessed
//!   (that letter would have been revealed there)

use super::GuessedLetters;
use super::progress::PLACEHOLDER;

/// Check whether `candidate` is consistent with the current progress
///
/// `progress` is a string as produced by
/// [`render_progress`](super::render_progress): one token per position,
/// separated by whitespace.
///
/// # Examples
/// ```
/// use hangman::core::{GuessedLetters, matches};
///
/// let guessed: GuessedLetters = "a".chars().collect();
/// assert!(matches("_ a _", &guessed, "car"));
/// assert!(!matches("_ a _", &guessed, "cab a"));
/// assert!(!matches("_ a _", &guessed, "aah"));
/// ```
#[must_use]
pub fn matches(progress: &str, guessed: &GuessedLetters, candidate: &str) -> bool {
    let tokens: Vec<&str> = progress.split_whitespace().collect();

    if tokens.len() != candidate.chars().count() {
        return false;
    }

    tokens
        .iter()
        .zip(candidate.chars())
        .all(|(&token, c)| match single_char(token) {
            Some(PLACEHOLDER) => !guessed.contains_char(c),
            Some(revealed) => revealed == c,
            None => false,
        })
}

/// Lazily list the dictionary words consistent with the current progress
///
/// Words come back in dictionary order, duplicates included. Call again to
/// re-scan.
pub fn list_possible_matches<'d, W: AsRef<str>>(
    progress: &str,
    guessed: &GuessedLetters,
    dictionary: &'d [W],
) -> impl Iterator<Item = &'d W> {
    dictionary
        .iter()
        .filter(move |word| matches(progress, guessed, word.as_ref()))
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
