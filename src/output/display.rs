//! Display functions for the game transcript
//!
//! Every writer takes `impl Write` so the transcript can go to stdout or a buffer.

use super::formatters::{format_letters, format_matches, plural};
use crate::game::{Game, HINT_PENALTY, HINT_SYMBOL, MISS_PENALTY, RoundEvent, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print the greeting and rules before the first round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_intro(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, " {} ", "H A N G M A N".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\nI am thinking of a word that is {} letters long.",
        game.secret().letter_count().to_string().bright_yellow().bold()
    )?;
    writeln!(
        out,
        "Correct guesses are free; each incorrect guess costs one life and {MISS_PENALTY} points."
    )?;
    writeln!(
        out,
        "Type {HINT_SYMBOL} for a list of possible words (costs {HINT_PENALTY} points)."
    )?;
    writeln!(
        out,
        "You have {} and {}.\n",
        plural(game.lives(), "life", "lives"),
        plural(game.warnings(), "warning", "warnings")
    )?;
    Ok(())
}

/// Print the status block shown at the start of every round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_header(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "Current score:     {}", game.score())?;
    writeln!(out, "Lives remaining:   {}", game.lives())?;
    writeln!(out, "Warnings left:     {}", game.warnings())?;
    writeln!(
        out,
        "Available letters: {}",
        format_letters(&game.available_letters())
    )?;
    writeln!(out, "Your progress:     {}", game.progress().bright_white().bold())?;
    Ok(())
}

/// Print the feedback for one round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_event(out: &mut impl Write, event: &RoundEvent) -> io::Result<()> {
    match event {
        RoundEvent::GoodGuess(letter) => {
            writeln!(out, "\n{}\n", format!("✓ Good guess: {letter}").green().bold())?;
        }
        RoundEvent::BadGuess(letter) => {
            writeln!(
                out,
                "\n{}\n",
                format!("✗ Not a good guess: {letter} is not in the word").red().bold()
            )?;
        }
        RoundEvent::Hint { matches } => {
            writeln!(out, "\nPossible matches: {}\n", format_matches(matches))?;
        }
        RoundEvent::Warning {
            input,
            warnings_left,
        } => {
            writeln!(
                out,
                "\n{}",
                format!("Warning! '{input}' is not one of the available letters.").yellow()
            )?;
            writeln!(
                out,
                "You have {} left.\n",
                plural(*warnings_left, "warning", "warnings")
            )?;
        }
    }
    Ok(())
}

/// Print the final result of a finished game
///
/// Writes nothing while the game is still being played.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_outcome(out: &mut impl Write, game: &Game) -> io::Result<()> {
    let secret = game.secret().text();

    match game.status() {
        Status::Won => writeln!(
            out,
            "\n{}",
            format!(
                "Congratulations! You guessed the word '{secret}' with a score of {}.",
                game.score()
            )
            .bright_green()
            .bold()
        ),
        Status::Playing => Ok(()),
        status @ (Status::LostLives | Status::LostWarnings) => {
            let resource = status.exhausted_resource().unwrap_or_default();
            writeln!(
                out,
                "\n{}",
                format!(
                    "Sorry, you lost because you ran out of {resource}. The word was '{secret}'."
                )
                .red()
                .bold()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Word};
    use crate::game::PlayerInput;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn intro_mentions_length_and_rules() {
        let game = Game::new(Word::new("hangman").unwrap(), &[]);
        let text = render(|out| write_intro(out, &game));

        assert!(text.contains("7 letters long"));
        assert!(text.contains("5 lives and 3 warnings"));
    }

    #[test]
    fn header_shows_counters_and_progress() {
        let game = Game::new(Word::new("cat").unwrap(), &[]);
        let text = render(|out| write_round_header(out, &game));

        assert!(text.contains("Current score:     100"));
        assert!(text.contains("Lives remaining:   5"));
        assert!(text.contains("Warnings left:     3"));
        assert!(text.contains("Available letters: a b c"));
        assert!(text.contains("Your progress:     _ _ _"));
    }

    #[test]
    fn warning_event_names_input() {
        let event = RoundEvent::Warning {
            input: "7".to_string(),
            warnings_left: 1,
        };
        let text = render(|out| write_event(out, &event));

        assert!(text.contains("'7' is not one of the available letters"));
        assert!(text.contains("You have 1 warning left."));
    }

    #[test]
    fn guess_events() {
        let letter = Letter::new('q').unwrap();
        let good = render(|out| write_event(out, &RoundEvent::GoodGuess(letter)));
        let bad = render(|out| write_event(out, &RoundEvent::BadGuess(letter)));

        assert!(good.contains("Good guess: q"));
        assert!(bad.contains("q is not in the word"));
    }

    #[test]
    fn outcome_for_each_status() {
        let mut won = Game::new(Word::new("a").unwrap(), &[]);
        won.play_round(PlayerInput::Letter(Letter::new('a').unwrap())).unwrap();
        let text = render(|out| write_outcome(out, &won));
        assert!(text.contains("You guessed the word 'a' with a score of 100."));

        let mut lost = Game::new(Word::new("a").unwrap(), &[]);
        for _ in 0..3 {
            lost.play_round(PlayerInput::Invalid(String::new())).unwrap();
        }
        let text = render(|out| write_outcome(out, &lost));
        assert!(text.contains("ran out of warnings. The word was 'a'."));
    }

    #[test]
    fn outcome_empty_while_playing() {
        let game = Game::new(Word::new("cat").unwrap(), &[]);
        let text = render(|out| write_outcome(out, &game));
        assert!(text.is_empty());
    }

    #[test]
    fn hint_event_lists_words() {
        let bar = Word::new("bar").unwrap();
        let event = RoundEvent::Hint {
            matches: vec![&bar],
        };
        let text = render(|out| write_event(out, &event));

        assert!(text.contains("Possible matches: bar"));
    }
}
