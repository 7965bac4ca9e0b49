//! Game loop state machine
//!
//! Input is classified first ([`PlayerInput`]), then applied to a [`Game`]
//! in a single transition that reports a [`RoundEvent`].

mod input;
mod state;

pub use input::PlayerInput;
pub use state::{Game, GameError, RoundEvent, Status};

/// Score at the start of a game
pub const INITIAL_SCORE: i32 = 100;

/// Score lost per incorrect letter
pub const MISS_PENALTY: i32 = 10;

/// Score lost per hint request
pub const HINT_PENALTY: i32 = 10;

/// Incorrect letters allowed
pub const INITIAL_LIVES: u32 = 5;

/// Invalid inputs allowed
pub const INITIAL_WARNINGS: u32 = 3;

/// Input that asks for the list of possible matches
pub const HINT_SYMBOL: char = '*';
