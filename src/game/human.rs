//! Human player reading patterns from a line-based input

use super::{GameError, Player};
use crate::core::{Feedback, GameConfig, Pattern};
use std::io::{BufRead, Write};

/// A human at the keyboard
///
/// Prompts go to `writer` and patterns are read one line at a time from
/// `reader`. Invalid patterns are reported and asked for again.
pub struct HumanStrategy<R, W> {
    config: GameConfig,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    #[must_use]
    pub const fn new(config: GameConfig, reader: R, writer: W) -> Self {
        Self {
            config,
            reader,
            writer,
        }
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prompt until a valid pattern is entered
    fn read_pattern(&mut self, prompt: &str) -> Result<Pattern, GameError> {
        loop {
            let line = read_line(&mut self.reader, &mut self.writer, prompt)?
                .ok_or(GameError::InputClosed)?;

            match Pattern::parse(&line, &self.config) {
                Ok(pattern) => return Ok(pattern),
                Err(e) => writeln!(self.writer, "❌ {e}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanStrategy<R, W> {
    fn choose_secret(&mut self) -> Result<Pattern, GameError> {
        self.read_pattern("Choose a secret pattern")
    }

    fn make_guess(&mut self) -> Result<Pattern, GameError> {
        self.read_pattern("Make a guess")
    }

    fn analyse_feedback(&mut self, guess: &Pattern, feedback: Feedback) -> Result<(), GameError> {
        writeln!(self.writer, "Feedback for {guess}: {feedback}")?;
        Ok(())
    }
}

/// Prompt and read one trimmed line; `None` at end of input
///
/// # Errors
/// Returns any I/O error from reading or writing.
pub fn read_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(writer, "{prompt}: ")?;
    writer.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
