use serde::Serialize;

use crate::domain::Card;

/// A participant in one game. Names are unique within a game and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    score: u32,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            hand,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub(crate) fn award_point(&mut self) {
        self.score += 1;
    }

    /// Remove the card at `index`, preserving the order of the rest. Returns
    /// `None` (and changes nothing) when the index is out of bounds.
    pub(crate) fn play(&mut self, index: usize) -> Option<Card> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn take(&mut self, card: Card) {
        self.hand.push(card);
    }
}
