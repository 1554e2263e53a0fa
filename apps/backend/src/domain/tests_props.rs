//! Property tests for the deck and the round invariants (pure domain).
//!
//! Properties tested:
//! - Drawing k of n cards leaves n-k, disjoint from the drawn ones, multiset conserved
//! - Under any sequence of actions, submissions never exceed players-1 and
//!   never include the judge
//! - Rejected actions never change the game

use proptest::prelude::*;

use crate::domain::test_helpers::{cards, ordered_game};
use crate::domain::{Card, DrawPile};

#[derive(Debug, Clone)]
enum Action {
    Join(usize),
    Submit(usize, usize),
    Choose(usize, usize),
}

const NAMES: [&str; 5] = ["ann", "ben", "cat", "dan", "eve"];

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..NAMES.len()).prop_map(Action::Join),
        (0..NAMES.len(), 0..9usize).prop_map(|(p, c)| Action::Submit(p, c)),
        (0..NAMES.len(), 0..5usize).prop_map(|(p, s)| Action::Choose(p, s)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_draw_conserves_and_separates(n in 0..60usize, k in 0..80usize) {
        let source = cards("r", n);
        let mut pile = DrawPile::from(source.clone());

        let drawn = pile.draw_up_to(k);

        let taken = k.min(n);
        prop_assert_eq!(drawn.len(), taken);
        prop_assert_eq!(pile.len(), n - taken);
        for card in pile.iter() {
            prop_assert!(!drawn.contains(card));
        }
        let mut all: Vec<Card> = drawn.iter().chain(pile.iter()).cloned().collect();
        let mut expected = source;
        all.sort();
        expected.sort();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn prop_round_invariants_hold(actions in prop::collection::vec(action(), 1..80)) {
        let (mut game, _) = ordered_game(6, 40, 4);

        for action in actions {
            let before = format!("{game:?}{:?}{:?}", game.round(), game.players());
            let rejected = match action {
                Action::Join(p) => {
                    game.join(NAMES[p]);
                    false
                }
                Action::Submit(p, c) => game.submit(NAMES[p], c).is_err(),
                Action::Choose(p, s) => game.choose_winner(NAMES[p], s).is_err(),
            };
            if rejected {
                let after = format!("{game:?}{:?}{:?}", game.round(), game.players());
                prop_assert_eq!(before, after);
            }

            let submissions = game.round().submissions();
            prop_assert!(submissions.len() <= game.players().len().saturating_sub(1));
            if let Some(judge) = game.round().judge() {
                prop_assert!(submissions.iter().all(|s| s.player != judge));
                prop_assert!(game.player(judge).is_some());
            }
            for player in game.players() {
                prop_assert!(player.hand().len() <= game.rules().hand_size);
            }
        }
    }
}
