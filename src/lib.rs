//! Hangman
//!
//! A terminal word-guessing game with a dictionary-backed hint command.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessedLetters, render_progress, matches};
//!
//! let guessed: GuessedLetters = "ct".chars().collect();
//! let progress = render_progress("cat", &guessed);
//! assert_eq!(progress, "c _ t");
//! assert!(matches(&progress, &guessed, "cut"));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
