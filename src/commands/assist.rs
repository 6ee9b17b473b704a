//! Assisted play against a physical board
//!
//! The solver suggests each guess and the user types back the key pegs.

use crate::core::{Feedback, GameConfig};
use crate::game::read_line;
use crate::solver::{DeductionStrategy, SolverError};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// How an assisted session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistOutcome {
    Solved { guesses: usize },
    Quit,
    /// No pattern fits the feedback entered
    Inconsistent { turn: usize },
    OutOfTurns,
}

/// Run the assisted session
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver rejects its own guess.
pub fn run_assist<G: Rng, R: BufRead, W: Write>(
    config: GameConfig,
    rng: G,
    mut reader: R,
    mut writer: W,
) -> Result<AssistOutcome> {
    let length = config.pattern_length();

    writeln!(writer, "I'll suggest guesses; enter the key pegs for each one:")?;
    writeln!(writer, "  - b for each black peg (right colour, right place)")?;
    writeln!(writer, "  - w for each white peg (right colour, wrong place)")?;
    writeln!(writer, "  - '-' for no pegs, 'win' if solved, 'quit' to exit\n")?;

    let mut strategy = DeductionStrategy::new(config, rng);

    for turn in 1..=config.max_turns() {
        let guess = match strategy.next_guess() {
            Ok(guess) => guess,
            Err(SolverError::Exhausted { .. }) => break,
            Err(e) => return Err(e.into()),
        };

        match strategy.current_candidate_count() {
            Some(count) => writeln!(writer, "Turn {turn}: {count} candidates remaining")?,
            None => writeln!(writer, "Turn {turn}: {}", strategy.phase())?,
        }
        writeln!(writer, "Suggested guess: {guess}")?;

        let feedback = loop {
            let Some(input) = read_line(&mut reader, &mut writer, "Feedback")? else {
                return Ok(AssistOutcome::Quit);
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(AssistOutcome::Quit),
                "win" | "correct" | "solved" => break Feedback::perfect(length),
                text => match Feedback::parse(text) {
                    Ok(feedback) if feedback.len() <= length => break feedback,
                    Ok(feedback) => writeln!(
                        writer,
                        "❌ {feedback} has more than {length} pegs"
                    )?,
                    Err(e) => writeln!(writer, "❌ {e}")?,
                },
            }
        };

        if feedback.is_solved(length) {
            writeln!(writer, "\n✅ Solved in {turn} guesses!")?;
            return Ok(AssistOutcome::Solved { guesses: turn });
        }

        match strategy.observe(&guess, feedback) {
            Ok(()) => {}
            Err(SolverError::InconsistentFeedback { turn }) => {
                writeln!(
                    writer,
                    "\n❌ No pattern fits that feedback. Please check the board."
                )?;
                return Ok(AssistOutcome::Inconsistent { turn });
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(writer, "\nOut of turns.")?;
    Ok(AssistOutcome::OutOfTurns)
}
