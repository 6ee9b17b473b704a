//! Human-vs-computer, human-vs-human and computer-vs-computer games

use crate::core::GameConfig;
use crate::game::{GameError, GameRecord, HumanStrategy, Player, break_secret, play_game};
use crate::solver::DeductionStrategy;
use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

/// Which side of the board the human takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Role {
    /// Guess the computer's secret
    #[default]
    Breaker,
    /// Choose a secret for the computer to crack
    Maker,
}

/// Play one game between a human on `reader`/`writer` and the solver
///
/// # Errors
///
/// Returns `GameError` if input ends early or the solver fails.
pub fn run_play<R: BufRead, W: Write>(
    config: GameConfig,
    role: Role,
    rng: StdRng,
    reader: R,
    mut writer: W,
) -> Result<GameRecord, GameError> {
    let colours: String = config.palette().iter().map(|p| p.code()).collect();
    writeln!(
        writer,
        "{} pegs, colours [{colours}], {} turns",
        config.pattern_length(),
        config.max_turns()
    )?;

    let mut computer = DeductionStrategy::new(config, rng);
    let mut human = HumanStrategy::new(config, reader, writer);

    match role {
        Role::Breaker => play_game(&config, &mut computer, &mut human),
        Role::Maker => play_game(&config, &mut human, &mut computer),
    }
}

/// Two humans sharing one terminal
///
/// The codemaker enters the secret, which is then scrolled out of view before
/// the codebreaker starts guessing.
///
/// # Errors
///
/// Returns `GameError` if input ends early.
pub fn run_versus<R: BufRead, W: Write>(
    config: GameConfig,
    mut reader: R,
    mut writer: W,
) -> Result<GameRecord, GameError> {
    writeln!(writer, "Codebreaker, look away while the secret is chosen")?;
    let secret = HumanStrategy::new(config, &mut reader, &mut writer).choose_secret()?;
    writeln!(writer, "{}", "\n".repeat(SCROLL_LINES))?;

    writeln!(writer, "Codebreaker, your turn")?;
    let mut breaker = HumanStrategy::new(config, reader, writer);
    break_secret(&config, secret, &mut breaker)
}

const SCROLL_LINES: usize = 40;

/// Let two solvers play each other
///
/// # Errors
///
/// Returns `GameError` if the codebreaker rejects true feedback.
pub fn run_duel(config: GameConfig, mut rng: StdRng) -> Result<GameRecord, GameError> {
    let mut maker = DeductionStrategy::new(config, StdRng::from_rng(&mut rng));
    let mut breaker = DeductionStrategy::new(config, rng);
    play_game(&config, &mut maker, &mut breaker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Pattern};
    use std::io::Cursor;

    #[test]
    fn human_maker_is_cracked() {
        let config = GameConfig::default();
        let mut output = Vec::new();
        let record = run_play(
            config,
            Role::Maker,
            StdRng::seed_from_u64(4),
            Cursor::new("ybbm\n"),
            &mut output,
        )
        .unwrap();

        assert!(record.solved);
        assert_eq!(record.secret, Pattern::parse("ybbm", &config).unwrap());
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("4 pegs, colours [rgbcmy], 12 turns"));
        assert!(text.contains("Choose a secret pattern"));
    }

    #[test]
    fn human_breaker_input_closed() {
        let result = run_play(
            GameConfig::default(),
            Role::Breaker,
            StdRng::seed_from_u64(4),
            Cursor::new("rrrr\n"),
            Vec::new(),
        );

        // One guess, then end of input (unless the secret was rrrr)
        match result {
            Err(GameError::InputClosed) => {}
            Ok(record) => assert_eq!(record.turns[0].feedback, Feedback::perfect(4)),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn versus_hides_secret_then_breaks_it() {
        let config = GameConfig::default();
        let mut output = Vec::new();
        let record = run_versus(
            config,
            Cursor::new("gcmr\nrgby\ngcmr\n"),
            &mut output,
        )
        .unwrap();

        assert!(record.solved);
        assert_eq!(record.guesses(), 2);
        assert_eq!(record.turns[0].feedback, Feedback::new(0, 2));

        let text = String::from_utf8(output).unwrap();
        let secret_prompt = text.find("Choose a secret pattern").unwrap();
        let guess_prompt = text.find("Make a guess").unwrap();
        assert!(text[secret_prompt..guess_prompt].matches('\n').count() > SCROLL_LINES);
    }

    #[test]
    fn versus_input_closed_before_secret() {
        assert!(matches!(
            run_versus(GameConfig::default(), Cursor::new(""), Vec::new()),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn duel_is_solved_and_reproducible() {
        let config = GameConfig::default();
        let first = run_duel(config, StdRng::seed_from_u64(21)).unwrap();
        let second = run_duel(config, StdRng::seed_from_u64(21)).unwrap();

        assert!(first.solved);
        assert_eq!(first, second);
    }
}
