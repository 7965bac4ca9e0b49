//! Interactive play mode
//!
//! Line-oriented prompt/response loop around a [`Game`].

use crate::game::{Game, PlayerInput, Status};
use crate::output::{write_event, write_intro, write_outcome, write_round_header};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

const PROMPT: &str = "Choose a letter from the available letters";

/// A blocking play session over any line reader and writer
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Play `game` until it is won or lost
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or if the
    /// input ends before the game is over.
    pub fn play(&mut self, game: &mut Game) -> Result<Status> {
        write_intro(&mut self.output, game)?;

        while !game.status().is_over() {
            write_round_header(&mut self.output, game)?;

            let line = self.prompt(PROMPT)?;
            let input = PlayerInput::classify(&line, game.guessed());
            let event = game.play_round(input)?;

            write_event(&mut self.output, &event)?;
        }

        write_outcome(&mut self.output, game)?;
        self.output.flush()?;
        Ok(game.status())
    }

    /// Consume the session and hand back the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Get user input with a prompt
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "\n{prompt}: ")?;
        self.output.flush().context("failed to flush prompt")?;

        // Raw bytes: a line that is not UTF-8 is still player input and costs a warning
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("failed to read player input")?;

        if read == 0 {
            bail!("input closed before the game finished");
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
