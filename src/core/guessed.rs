//! The set of letters a player has guessed so far

use super::Letter;
use rustc_hash::FxHashSet;

/// Insert-only set of guessed letters
///
/// Only ever holds lowercase letters, so it is always a subset of the alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: FxHashSet<Letter>,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess. Returns `true` if the letter was not guessed before.
    pub fn insert(&mut self, letter: Letter) -> bool {
        self.letters.insert(letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Check a raw character against the set
    ///
    /// Characters that are not lowercase letters are never contained.
    #[inline]
    #[must_use]
    pub fn contains_char(&self, ch: char) -> bool {
        Letter::new(ch).is_some_and(|letter| self.contains(letter))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromIterator<Letter> for GuessedLetters {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self {
            letters: iter.into_iter().collect(),
        }
    }
}

/// Collect from raw characters, skipping anything that is not a lowercase letter
impl FromIterator<char> for GuessedLetters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter().filter_map(Letter::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn insert_reports_new_letters() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.insert(letter('e')));
        assert!(!guessed.insert(letter('e')));
        assert_eq!(guessed.len(), 1);
    }

    #[test]
    fn contains_char_rejects_non_letters() {
        let guessed: GuessedLetters = "ab".chars().collect();
        assert!(guessed.contains_char('a'));
        assert!(!guessed.contains_char('A'));
        assert!(!guessed.contains_char('_'));
        assert!(!guessed.contains_char('c'));
    }

    #[test]
    fn collect_from_chars_skips_non_letters() {
        let guessed: GuessedLetters = "a B1_c".chars().collect();
        assert_eq!(guessed.len(), 2);
        assert!(guessed.contains(letter('a')));
        assert!(guessed.contains(letter('c')));
    }

    #[test]
    fn duplicates_collapse() {
        let guessed: GuessedLetters = "aaaa".chars().collect();
        assert_eq!(guessed.len(), 1);
        assert!(!guessed.is_empty());
    }
}
