//! Property-based tests for the evaluator, the candidate merger and the strategy.

use proptest::prelude::*;

use mastermind_solver::core::{Feedback, GameConfig, Pattern, Peg};
use mastermind_solver::solver::{DeductionStrategy, merge_and_filter};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pattern_from(indices: &[usize]) -> Pattern {
    indices
        .iter()
        .map(|&i| Peg::new(i).unwrap())
        .collect::<Vec<_>>()
        .into()
}

/// Strategy: a game size and two patterns over its palette.
fn game_strategy() -> impl Strategy<Value = (usize, usize, Vec<usize>, Vec<usize>)> {
    (3..=6usize, 3..=8usize).prop_flat_map(|(length, palette)| {
        (
            Just(length),
            Just(palette),
            prop::collection::vec(0..palette, length),
            prop::collection::vec(0..palette, length),
        )
    })
}

/// Strategy: a pattern and a rearrangement of it.
fn permutation_strategy() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (3..=5usize, 3..=6usize)
        .prop_flat_map(|(length, palette)| prop::collection::vec(0..palette, length))
        .prop_flat_map(|pegs| (Just(pegs.clone()), Just(pegs).prop_shuffle()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Keys never outnumber pegs
    #[test]
    fn feedback_bounded((length, _, a, b) in game_strategy()) {
        let feedback = Feedback::evaluate(&pattern_from(&a), &pattern_from(&b));
        prop_assert!(feedback.len() <= length, "{feedback} for length {length}");
    }

    // Scoring is symmetric in guess and secret
    #[test]
    fn feedback_symmetric((_, _, a, b) in game_strategy()) {
        let (a, b) = (pattern_from(&a), pattern_from(&b));
        prop_assert_eq!(Feedback::evaluate(&a, &b), Feedback::evaluate(&b, &a));
    }

    // A pattern scored against itself is perfect
    #[test]
    fn self_feedback_perfect((length, _, a, _) in game_strategy()) {
        let a = pattern_from(&a);
        prop_assert!(Feedback::evaluate(&a, &a).is_solved(length));
    }

    // Every rearrangement consistent with the feedback is rebuilt, the secret included
    #[test]
    fn merge_keeps_secret((guess, secret) in permutation_strategy()) {
        let (guess, secret) = (pattern_from(&guess), pattern_from(&secret));
        let feedback = Feedback::evaluate(&guess, &secret);
        let candidates = merge_and_filter(&guess, feedback);

        prop_assert!(candidates.contains(&secret));
        for candidate in candidates.iter() {
            prop_assert_eq!(Feedback::evaluate(&guess, candidate), feedback);
        }
    }

    // Intersecting a set with itself changes nothing
    #[test]
    fn intersection_idempotent((guess, secret) in permutation_strategy()) {
        let (guess, secret) = (pattern_from(&guess), pattern_from(&secret));
        let candidates = merge_and_filter(&guess, Feedback::evaluate(&guess, &secret));
        let twice = candidates.intersect(&candidates);

        prop_assert_eq!(twice.sorted(), candidates.sorted());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // With true feedback the secret is never eliminated and every observation is accepted
    #[test]
    fn secret_never_eliminated(
        (length, palette, secret, _) in game_strategy().prop_filter("keep games small", |(l, _, _, _)| *l <= 5),
        seed in any::<u64>(),
    ) {
        let config = GameConfig::with_turns(length, palette, 40).unwrap();
        let secret = pattern_from(&secret);
        let mut strategy = DeductionStrategy::new(config, StdRng::seed_from_u64(seed));

        let mut solved = false;
        for _ in 0..config.max_turns() {
            let guess = strategy.next_guess().unwrap();
            let feedback = Feedback::evaluate(&guess, &secret);
            if feedback.is_solved(length) {
                solved = true;
                break;
            }
            prop_assert!(strategy.observe(&guess, feedback).is_ok(), "{guess} rejected for {secret}");
            if let Some(candidates) = strategy.candidates() {
                prop_assert!(candidates.contains(&secret), "{secret} eliminated by {guess}");
            }
        }
        prop_assert!(solved, "{secret} not solved in 40 turns");
    }
}
