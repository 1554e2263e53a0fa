//! Domain layer: the deck, players, rounds and the game state machine.

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod player;
pub mod round;
pub mod rules;
pub mod views;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests_game_flow;
#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use cards::Card;
pub use deck::{Deck, DrawPile};
pub use errors::{DeckError, GameError};
pub use game::{Game, Phase, RoundOutcome};
pub use player::Player;
pub use round::{Round, Submission};
pub use rules::{GameRules, DEFAULT_HAND_SIZE};
pub use views::{HandView, HeaderView, PlayerView};
