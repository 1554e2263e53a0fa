use std::sync::Arc;

use crate::domain::test_helpers::{cards, ordered_game, seated_game, submit_all};
use crate::domain::{Card, DrawPile, Game, GameError, GameRules, Phase, RoundOutcome, Submission};
use crate::realtime::RecordingPort;

fn hand_of(game: &Game, name: &str) -> Vec<Card> {
    game.player(name).expect("seated").hand().to_vec()
}

fn score_of(game: &Game, name: &str) -> u32 {
    game.player(name).expect("seated").score()
}

#[test]
fn creating_a_game_with_no_prompts_fails() {
    let err = Game::from_piles(
        "den",
        DrawPile::default(),
        DrawPile::from(cards("r", 10)),
        GameRules::default(),
        Arc::new(RecordingPort::new()),
    )
    .unwrap_err();
    assert_eq!(err, GameError::DeckExhausted);
}

#[test]
fn first_prompt_is_drawn_at_creation() {
    let (game, _) = ordered_game(3, 20, 7);
    assert_eq!(game.round().prompt(), &Card::from("p0"));
    assert_eq!(game.prompts_left(), 2);
    assert_eq!(game.phase(), Phase::Empty);
}

#[test]
fn two_player_round_end_to_end() {
    let (mut game, _) = ordered_game(5, 30, 7);

    let alice = game.join("alice");
    assert!(alice.is_judge);
    assert_eq!(game.phase(), Phase::AwaitingSecondPlayer);

    let bob = game.join("bob");
    assert!(!bob.is_judge);
    assert_eq!(hand_of(&game, "bob"), cards("r", 14)[7..].to_vec());
    assert_eq!(game.phase(), Phase::RoundInProgress);

    game.submit("bob", 0).unwrap();
    assert_eq!(hand_of(&game, "bob"), cards("r", 14)[8..].to_vec());
    assert_eq!(game.phase(), Phase::Revealing);

    let outcome = game.choose_winner("alice", 0).unwrap();
    assert_eq!(
        outcome,
        RoundOutcome {
            winner: Some(Submission {
                player: "bob".into(),
                card: Card::from("r7"),
            }),
            finished: false,
        }
    );
    assert_eq!(score_of(&game, "bob"), 1);
    assert_eq!(score_of(&game, "alice"), 0);
    assert!(game.round().submissions().is_empty());
    assert_eq!(game.round().prompt(), &Card::from("p1"));
    assert_eq!(game.round().judge(), Some("bob"));
    assert_eq!(hand_of(&game, "bob").len(), 7);
    assert_eq!(hand_of(&game, "bob").last(), Some(&Card::from("r14")));
    // The old judge never played, so their hand was already full.
    assert_eq!(hand_of(&game, "alice"), cards("r", 7));
    assert_eq!(game.responses_left(), 15);
}

#[test]
fn judge_rotation_is_positional_and_wraps() {
    let (mut game, _) = seated_game(&["a", "b", "c"], 10, 60, 3);
    let mut judges = Vec::new();

    for _ in 0..4 {
        judges.push(game.round().judge().unwrap().to_string());
        submit_all(&mut game);
        // Always reward the same seat position so scores diverge.
        game.choose_winner(&judges[judges.len() - 1], 0).unwrap();
    }

    assert_eq!(judges, ["a", "b", "c", "a"]);
}

#[test]
fn exhausting_prompts_finishes_the_game() {
    let (mut game, _) = seated_game(&["alice", "bob"], 2, 30, 7);

    game.submit("bob", 0).unwrap();
    assert!(!game.choose_winner("alice", 0).unwrap().finished);
    assert_eq!(game.prompts_left(), 0);

    game.submit("alice", 0).unwrap();
    let outcome = game.choose_winner("bob", 0).unwrap();

    assert!(outcome.finished);
    assert!(game.is_finished());
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.round().prompt(), &Card::from("p1"));
    assert_eq!(game.round().judge(), Some("bob"));
    assert_eq!(score_of(&game, "alice"), 1);
    assert_eq!(score_of(&game, "bob"), 1);
}

#[test]
fn actions_after_finish_are_rejected_without_change() {
    let (mut game, _) = seated_game(&["alice", "bob"], 1, 30, 7);
    game.submit("bob", 0).unwrap();
    game.choose_winner("alice", 0).unwrap();
    assert!(game.is_finished());

    let before = hand_of(&game, "alice");
    assert_eq!(game.choose_winner("bob", 0), Err(GameError::GameFinished));
    assert_eq!(game.choose_winner("alice", 0), Err(GameError::GameFinished));
    assert_eq!(game.submit("alice", 0), Err(GameError::GameFinished));
    assert_eq!(hand_of(&game, "alice"), before);
    assert_eq!(score_of(&game, "bob"), 1);

    // Joining still works and shows the final scoreboard.
    let carol = game.join("carol");
    assert!(carol.header.finished);
    assert_eq!(carol.header.scores.len(), 3);
}

#[test]
fn duplicate_submission_leaves_state_unchanged() {
    let (mut game, _) = seated_game(&["a", "b", "c"], 5, 40, 5);
    game.submit("b", 0).unwrap();
    let hand = hand_of(&game, "b");
    let submissions = game.round().submissions().to_vec();

    assert_eq!(
        game.submit("b", 0),
        Err(GameError::DuplicateSubmission("b".into()))
    );
    assert_eq!(hand_of(&game, "b"), hand);
    assert_eq!(game.round().submissions(), submissions.as_slice());
}

#[test]
fn rejoin_is_idempotent() {
    let (mut game, port) = seated_game(&["alice", "bob"], 5, 30, 7);
    game.submit("bob", 2).unwrap();
    game.choose_winner("alice", 0).unwrap();
    let hand = hand_of(&game, "bob");
    let left = game.responses_left();
    port.clear();

    let view = game.join("bob");

    assert_eq!(view.score, 1);
    assert_eq!(hand_of(&game, "bob"), hand);
    assert_eq!(game.responses_left(), left);
    assert_eq!(game.players().len(), 2);
    assert!(port.events().is_empty());
}

#[test]
fn names_are_case_sensitive() {
    let (game, _) = seated_game(&["alice", "Alice"], 5, 30, 7);
    assert_eq!(game.players().len(), 2);
}

#[test]
fn submit_checks_run_in_order() {
    let (mut game, _) = seated_game(&["alice"], 5, 30, 7);
    assert_eq!(game.submit("ghost", 99), Err(GameError::RoundNotStarted));
    assert_eq!(game.submit("alice", 0), Err(GameError::RoundNotStarted));

    game.join("bob");
    assert_eq!(
        game.submit("ghost", 99),
        Err(GameError::UnknownPlayer("ghost".into()))
    );
    assert_eq!(
        game.submit("alice", 0),
        Err(GameError::JudgeCannotSubmit("alice".into()))
    );
    assert_eq!(
        game.submit("bob", 7),
        Err(GameError::InvalidCard {
            index: 7,
            hand_len: 7
        })
    );
    assert_eq!(hand_of(&game, "bob").len(), 7);
    assert!(game.round().submissions().is_empty());
}

#[test]
fn choose_checks_run_in_order() {
    let (mut game, _) = seated_game(&["a", "b", "c"], 5, 40, 5);
    assert_eq!(
        game.choose_winner("b", 0),
        Err(GameError::NotJudge("b".into()))
    );
    assert_eq!(
        game.choose_winner("a", 0),
        Err(GameError::RevealPending { missing: 2 })
    );

    game.submit("c", 0).unwrap();
    game.submit("b", 0).unwrap();
    assert_eq!(
        game.choose_winner("a", 2),
        Err(GameError::InvalidSubmission { index: 2, count: 2 })
    );
    assert_eq!(game.round().submissions().len(), 2);

    // Arrival order decides the index: c came first.
    let outcome = game.choose_winner("a", 0).unwrap();
    assert_eq!(outcome.winner.unwrap().player, "c");
}

#[test]
fn choose_before_second_player_is_not_started() {
    let (mut game, _) = seated_game(&["alice"], 5, 30, 7);
    assert_eq!(
        game.choose_winner("alice", 0),
        Err(GameError::RoundNotStarted)
    );
}

#[test]
fn short_response_deck_deals_a_partial_hand() {
    let (mut game, _) = seated_game(&["alice", "bob"], 5, 9, 7);
    assert_eq!(hand_of(&game, "bob").len(), 2);

    game.join("carol");
    assert!(hand_of(&game, "carol").is_empty());
    assert_eq!(game.responses_left(), 0);
}

#[test]
fn replenish_is_skipped_when_deck_cannot_cover_everyone() {
    // 3 + 3 dealt, one card left for two players.
    let (mut game, port) = seated_game(&["alice", "bob"], 5, 7, 3);
    game.submit("bob", 0).unwrap();
    port.clear();

    game.choose_winner("alice", 0).unwrap();

    assert_eq!(hand_of(&game, "bob").len(), 2);
    assert_eq!(hand_of(&game, "alice").len(), 3);
    assert_eq!(game.responses_left(), 1);
}

#[test]
fn latecomer_joining_mid_round_raises_the_reveal_threshold() {
    let (mut game, _) = seated_game(&["a", "b"], 5, 40, 3);
    game.join("c");
    game.submit("b", 0).unwrap();
    assert_eq!(game.phase(), Phase::RoundInProgress);
    assert_eq!(game.submissions_needed(), 2);

    game.submit("c", 1).unwrap();
    assert_eq!(game.phase(), Phase::Revealing);
}

#[test]
fn latecomer_with_an_empty_hand_does_not_hold_up_the_round() {
    // 3 + 3 dealt, nothing left for carol.
    let (mut game, _) = seated_game(&["alice", "bob", "carol"], 5, 6, 3);
    assert!(hand_of(&game, "carol").is_empty());
    assert_eq!(game.submissions_needed(), 1);

    game.submit("bob", 0).unwrap();
    assert_eq!(game.phase(), Phase::Revealing);
    assert_eq!(
        game.submit("carol", 0),
        Err(GameError::InvalidCard {
            index: 0,
            hand_len: 0
        })
    );

    let outcome = game.choose_winner("alice", 0).unwrap();
    assert_eq!(outcome.winner.unwrap().player, "bob");
    assert_eq!(game.round().judge(), Some("bob"));
    assert_eq!(game.phase(), Phase::RoundInProgress);
}

#[test]
fn hands_drained_by_skipped_deals_close_rounds_unscored() {
    // 2 + 2 dealt, one card left: every deal is skipped.
    let (mut game, _) = seated_game(&["alice", "bob"], 8, 5, 2);
    for _ in 0..4 {
        let judge = game.round().judge().unwrap().to_string();
        submit_all(&mut game);
        game.choose_winner(&judge, 0).unwrap();
    }
    assert!(hand_of(&game, "alice").is_empty());
    assert!(hand_of(&game, "bob").is_empty());
    assert_eq!(score_of(&game, "alice"), 2);
    assert_eq!(score_of(&game, "bob"), 2);
    assert_eq!(game.prompts_left(), 3);

    // Nobody can play, so the judge may move on straight away.
    assert_eq!(game.round().judge(), Some("alice"));
    assert_eq!(game.phase(), Phase::Revealing);
    assert_eq!(
        game.submit("bob", 0),
        Err(GameError::InvalidCard {
            index: 0,
            hand_len: 0
        })
    );
    let outcome = game.choose_winner("alice", 3).unwrap();
    assert_eq!(outcome.winner, None);
    assert_eq!(game.round().judge(), Some("bob"));
    assert_eq!(game.prompts_left(), 2);

    while !game.is_finished() {
        let judge = game.round().judge().unwrap().to_string();
        game.choose_winner(&judge, 0).unwrap();
    }
    assert_eq!(score_of(&game, "alice"), 2);
    assert_eq!(score_of(&game, "bob"), 2);
}
