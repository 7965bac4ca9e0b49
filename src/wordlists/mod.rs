//! Dictionaries for hangman
//!
//! A built-in list compiled into the binary, loading from a file, and
//! picking the secret word.

mod embedded;
pub mod loader;
pub mod select;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{LoadError, load_from_file, words_from_slice};
pub use select::choose_word;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn builtin_words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_words_all_convert() {
        assert_eq!(words_from_slice(WORDS).len(), WORDS_COUNT);
    }

    #[test]
    fn builtin_words_include_examples() {
        for word in ["cat", "dog", "fox", "car", "bar"] {
            assert!(WORDS.contains(&word), "missing '{word}'");
        }
    }
}
