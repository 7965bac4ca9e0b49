//! Game state and the round transition

use super::{
    HINT_PENALTY, INITIAL_LIVES, INITIAL_SCORE, INITIAL_WARNINGS, MISS_PENALTY, PlayerInput,
};
use crate::core::{
    GuessedLetters, Letter, Word, available_letters, is_fully_revealed, list_possible_matches,
    render_progress,
};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    LostLives,
    LostWarnings,
}

impl Status {
    /// Check if the game has reached a terminal state
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }

    /// Name of the resource that ran out, for the two losing states
    #[must_use]
    pub const fn exhausted_resource(self) -> Option<&'static str> {
        match self {
            Self::LostLives => Some("lives"),
            Self::LostWarnings => Some("warnings"),
            Self::Playing | Self::Won => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::LostLives => write!(f, "lost (out of lives)"),
            Self::LostWarnings => write!(f, "lost (out of warnings)"),
        }
    }
}

/// What happened in a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent<'a> {
    /// The letter is in the secret word
    GoodGuess(Letter),
    /// The letter is not in the secret word; a life was lost
    BadGuess(Letter),
    /// Dictionary words still consistent with the progress
    Hint { matches: Vec<&'a Word> },
    /// The input was rejected and cost a warning
    Warning { input: String, warnings_left: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over: {0}")]
    Finished(Status),
}

/// A single game of hangman
///
/// Owns the secret word and all counters. The dictionary is borrowed for hints.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    secret: Word,
    dictionary: &'a [Word],
    guessed: GuessedLetters,
    score: i32,
    lives: u32,
    warnings: u32,
    status: Status,
}

impl<'a> Game<'a> {
    /// Start a new game with fresh counters
    #[must_use]
    pub fn new(secret: Word, dictionary: &'a [Word]) -> Self {
        debug!(length = secret.letter_count(), "secret word selected");

        let mut game = Self {
            secret,
            dictionary,
            guessed: GuessedLetters::new(),
            score: INITIAL_SCORE,
            lives: INITIAL_LIVES,
            warnings: INITIAL_WARNINGS,
            status: Status::Playing,
        };
        game.status = game.evaluate_status();
        game
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub const fn warnings(&self) -> u32 {
        self.warnings
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The progress string for the current guesses
    #[must_use]
    pub fn progress(&self) -> String {
        render_progress(self.secret.text(), &self.guessed)
    }

    #[must_use]
    pub fn available_letters(&self) -> Vec<Letter> {
        available_letters(&self.guessed)
    }

    /// Dictionary words consistent with the current progress
    #[must_use]
    pub fn possible_matches(&self) -> Vec<&'a Word> {
        let progress = self.progress();
        list_possible_matches(&progress, &self.guessed, self.dictionary).collect()
    }

    /// Apply one round of player input
    ///
    /// # Errors
    ///
    /// Returns `GameError::Finished` if the game is already over. The state
    /// is left untouched in that case.
    pub fn play_round(&mut self, input: PlayerInput) -> Result<RoundEvent<'a>, GameError> {
        if self.status.is_over() {
            return Err(GameError::Finished(self.status));
        }

        let event = match input {
            PlayerInput::Letter(letter) if self.guessed.contains(letter) => {
                self.warn(letter.to_string())
            }
            PlayerInput::Letter(letter) => {
                self.guessed.insert(letter);
                if self.secret.has_letter(letter) {
                    RoundEvent::GoodGuess(letter)
                } else {
                    self.lives = self.lives.saturating_sub(1);
                    self.score -= MISS_PENALTY;
                    RoundEvent::BadGuess(letter)
                }
            }
            PlayerInput::Hint => {
                self.score -= HINT_PENALTY;
                RoundEvent::Hint {
                    matches: self.possible_matches(),
                }
            }
            PlayerInput::Invalid(input) => self.warn(input),
        };

        self.status = self.evaluate_status();
        debug!(
            ?event,
            score = self.score,
            lives = self.lives,
            warnings = self.warnings,
            "round played"
        );
        if self.status.is_over() {
            info!(status = %self.status, score = self.score, "game finished");
        }

        Ok(event)
    }

    fn warn(&mut self, input: String) -> RoundEvent<'a> {
        self.warnings = self.warnings.saturating_sub(1);
        RoundEvent::Warning {
            input,
            warnings_left: self.warnings,
        }
    }

    fn evaluate_status(&self) -> Status {
        if is_fully_revealed(self.secret.text(), &self.guessed) {
            Status::Won
        } else if self.lives == 0 {
            Status::LostLives
        } else if self.warnings == 0 {
            Status::LostWarnings
        } else {
            Status::Playing
        }
    }
}
