//! Classifying a line of player input

use super::HINT_SYMBOL;
use crate::core::{GuessedLetters, Letter};

/// What a line of player input means for the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// A letter that has not been guessed yet
    Letter(Letter),
    /// The hint symbol
    Hint,
    /// Anything else, normalized
    Invalid(String),
}

impl PlayerInput {
    /// Classify a raw input line
    ///
    /// Surrounding whitespace is ignored and the input is lowercased.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessedLetters, Letter};
    /// use hangman::game::PlayerInput;
    ///
    /// let guessed: GuessedLetters = "e".chars().collect();
    /// assert_eq!(
    ///     PlayerInput::classify("T\n", &guessed),
    ///     PlayerInput::Letter(Letter::new('t').unwrap())
    /// );
    /// assert_eq!(PlayerInput::classify("*", &guessed), PlayerInput::Hint);
    /// assert_eq!(
    ///     PlayerInput::classify("e", &guessed),
    ///     PlayerInput::Invalid("e".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn classify(raw: &str, guessed: &GuessedLetters) -> Self {
        let input = raw.trim().to_lowercase();

        let mut chars = input.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        match single {
            Some(HINT_SYMBOL) => Self::Hint,
            Some(c) => match Letter::new(c) {
                Some(letter) if !guessed.contains(letter) => Self::Letter(letter),
                _ => Self::Invalid(input),
            },
            None => Self::Invalid(input),
        }
    }
}
