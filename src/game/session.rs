//! One game between a codemaker and a codebreaker

use super::{GameError, Player};
use crate::core::{Feedback, GameConfig, Pattern};
use crate::solver::SolverError;
use log::info;

/// A single turn on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Pattern,
    pub feedback: Feedback,
    /// Codebreaker's candidate count after taking in the feedback
    pub candidates_after: Option<usize>,
}

/// Everything that happened in one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: Pattern,
    pub turns: Vec<TurnRecord>,
    pub solved: bool,
}

impl GameRecord {
    /// Number of guesses made
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.turns.len()
    }
}

/// Play one game to completion
///
/// The codemaker picks a secret, then the codebreaker guesses until it scores
/// a perfect feedback or `max_turns` guesses have been made.
///
/// # Errors
/// Returns `GameError` if either player fails, or if a player produces a
/// pattern of the wrong length.
pub fn play_game(
    config: &GameConfig,
    codemaker: &mut dyn Player,
    codebreaker: &mut dyn Player,
) -> Result<GameRecord, GameError> {
    codemaker.ready_for_game();
    codebreaker.ready_for_game();

    let secret = codemaker.choose_secret()?;
    break_secret(config, secret, codebreaker)
}

/// Let the codebreaker guess an already chosen secret
///
/// # Errors
/// Returns `GameError` if the codebreaker fails, or if the secret or a guess
/// has the wrong length.
pub fn break_secret(
    config: &GameConfig,
    secret: Pattern,
    codebreaker: &mut dyn Player,
) -> Result<GameRecord, GameError> {
    check_length(config, &secret)?;

    let mut turns = Vec::new();
    for _ in 0..config.max_turns() {
        let guess = codebreaker.make_guess()?;
        check_length(config, &guess)?;

        let feedback = Feedback::evaluate(&guess, &secret);
        if feedback.is_solved(config.pattern_length()) {
            turns.push(TurnRecord {
                guess,
                feedback,
                candidates_after: codebreaker.candidate_count(),
            });
            info!("solved {secret} in {} guesses", turns.len());
            return Ok(GameRecord {
                secret,
                turns,
                solved: true,
            });
        }

        codebreaker.analyse_feedback(&guess, feedback)?;
        turns.push(TurnRecord {
            guess,
            feedback,
            candidates_after: codebreaker.candidate_count(),
        });
    }

    info!("failed to solve {secret} in {} guesses", turns.len());
    Ok(GameRecord {
        secret,
        turns,
        solved: false,
    })
}

fn check_length(config: &GameConfig, pattern: &Pattern) -> Result<(), GameError> {
    config
        .check_length(pattern.len())
        .map_err(|e| GameError::Solver(SolverError::Configuration(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::HumanStrategy;
    use crate::solver::DeductionStrategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    /// Codemaker with a fixed secret
    struct Fixed(Pattern);

    impl Player for Fixed {
        fn choose_secret(&mut self) -> Result<Pattern, GameError> {
            Ok(self.0.clone())
        }

        fn make_guess(&mut self) -> Result<Pattern, GameError> {
            Ok(self.0.clone())
        }

        fn analyse_feedback(&mut self, _: &Pattern, _: Feedback) -> Result<(), GameError> {
            Ok(())
        }
    }

    fn config() -> GameConfig {
        GameConfig::new(4, 6).unwrap()
    }

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text, &config()).unwrap()
    }

    #[test]
    fn deduction_codebreaker_solves() {
        let mut maker = Fixed(pattern("mcry"));
        let mut breaker = DeductionStrategy::new(config(), StdRng::seed_from_u64(3));

        let record = play_game(&config(), &mut maker, &mut breaker).unwrap();
        assert!(record.solved);
        assert_eq!(record.secret, pattern("mcry"));
        assert_eq!(record.turns.last().unwrap().guess, record.secret);
        assert!(record.guesses() <= 12);
        // Monochrome red first
        assert_eq!(record.turns[0].guess, pattern("rrrr"));
        assert_eq!(record.turns[0].feedback, Feedback::new(1, 0));
    }

    #[test]
    fn computer_versus_computer() {
        let mut maker = DeductionStrategy::new(config(), StdRng::seed_from_u64(10));
        let mut breaker = DeductionStrategy::new(config(), StdRng::seed_from_u64(11));

        let record = play_game(&config(), &mut maker, &mut breaker).unwrap();
        assert!(record.solved);
        assert!(
            record
                .turns
                .iter()
                .filter_map(|t| t.candidates_after)
                .all(|n| n >= 1)
        );
    }

    #[test]
    fn human_codebreaker_runs_out_of_turns() {
        let config = GameConfig::with_turns(4, 6, 3).unwrap();
        let mut maker = Fixed(pattern("rgby"));
        let mut breaker = HumanStrategy::new(
            config,
            Cursor::new("rrrr\ngggg\nbbbb\n"),
            Vec::new(),
        );

        let record = play_game(&config, &mut maker, &mut breaker).unwrap();
        assert!(!record.solved);
        assert_eq!(record.guesses(), 3);
        assert!(record.turns.iter().all(|t| t.feedback == Feedback::new(1, 0)));
        assert!(record.turns.iter().all(|t| t.candidates_after.is_none()));
    }

    #[test]
    fn human_codebreaker_wins() {
        let mut maker = Fixed(pattern("cmyr"));
        let mut breaker =
            HumanStrategy::new(config(), Cursor::new("rgby\ncmyr\n"), Vec::new());

        let record = play_game(&config(), &mut maker, &mut breaker).unwrap();
        assert!(record.solved);
        assert_eq!(record.guesses(), 2);
        assert_eq!(record.turns[0].feedback, Feedback::new(0, 2));
    }

    #[test]
    fn break_known_secret() {
        let mut breaker =
            HumanStrategy::new(config(), Cursor::new("rgby\nbbbb\n"), Vec::new());

        let record = break_secret(&config(), pattern("bbbb"), &mut breaker).unwrap();
        assert!(record.solved);
        assert_eq!(record.guesses(), 2);
        assert_eq!(record.turns[0].feedback, Feedback::new(1, 0));
    }

    #[test]
    fn wrong_length_secret_rejected() {
        let short = Pattern::parse("rgb", &GameConfig::new(3, 6).unwrap()).unwrap();
        let mut maker = Fixed(short);
        let mut breaker = DeductionStrategy::new(config(), StdRng::seed_from_u64(0));

        assert!(matches!(
            play_game(&config(), &mut maker, &mut breaker),
            Err(GameError::Solver(SolverError::Configuration(_)))
        ));
    }
}
