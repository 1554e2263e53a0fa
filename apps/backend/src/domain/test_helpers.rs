//! Test-only builders for games over piles in a known order.

use std::sync::Arc;

use crate::domain::{Card, DrawPile, Game, GameRules};
use crate::realtime::{ChannelKey, RecordingPort};

pub const GAME: &str = "den";

/// `prefix0, prefix1, ...`
pub fn cards(prefix: &str, n: usize) -> Vec<Card> {
    (0..n).map(|i| Card::new(format!("{prefix}{i}"))).collect()
}

/// A game whose piles draw in index order, plus the port it publishes to.
pub fn ordered_game(prompts: usize, responses: usize, hand_size: usize) -> (Game, Arc<RecordingPort>) {
    let port = Arc::new(RecordingPort::new());
    let game = Game::from_piles(
        GAME,
        DrawPile::from(cards("p", prompts)),
        DrawPile::from(cards("r", responses)),
        GameRules::with_hand_size(hand_size),
        port.clone(),
    )
    .expect("prompt pile is non-empty");
    (game, port)
}

/// Ordered game with `names` joined in order.
pub fn seated_game(
    names: &[&str],
    prompts: usize,
    responses: usize,
    hand_size: usize,
) -> (Game, Arc<RecordingPort>) {
    let (mut game, port) = ordered_game(prompts, responses, hand_size);
    for name in names {
        game.join(name);
    }
    (game, port)
}

/// Every non-judge plays the first card in their hand.
pub fn submit_all(game: &mut Game) {
    let judge = game.round().judge().map(str::to_string);
    let others: Vec<String> = game
        .players()
        .iter()
        .map(|p| p.name().to_string())
        .filter(|name| Some(name) != judge.as_ref())
        .collect();
    for name in others {
        game.submit(&name, 0).expect("submission accepted");
    }
}

pub fn key(player: &str) -> ChannelKey {
    ChannelKey::new(GAME, player)
}
