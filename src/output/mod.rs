//! Terminal output formatting
//!
//! Writers for the game transcript and small formatting helpers.

pub mod display;
pub mod formatters;

pub use display::{write_event, write_intro, write_outcome, write_round_header};
